/// Scrollable window over pre-wrapped lines.
///
/// The offset is always kept in `[0, max_offset()]`, so content changes and
/// resizes can never leave the window past the end of the text.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    lines: Vec<String>,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            offset: 0,
            lines: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Replaces the content, keeping the offset where it still fits.
    pub fn set_content(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.clamp();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-self.page());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Lines currently inside the window.
    pub fn visible(&self) -> &[String] {
        let end = (self.offset + self.height as usize).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    /// Percentage of the content scrolled past, 100 when everything fits.
    pub fn scroll_percent(&self) -> usize {
        match self.max_offset() {
            0 => 100,
            max => self.offset * 100 / max,
        }
    }

    fn page(&self) -> isize {
        (self.height as isize).max(1)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
