use std::cell::RefCell;
use std::rc::Rc;

use ratatui::text::Text;

use corpus::app::AppContext;
use corpus::config::Config;
use corpus::domain::Article;
use corpus::store::Store;
use corpus::text::display_width;
use corpus::tui::event::{Action, Effect, Event};
use corpus::tui::list::ListScreen;
use corpus::tui::navigator::Navigator;
use corpus::tui::screen::{to_plain, Screen};
use corpus::tui::{build_navigator, ARTICLES, HELP};

fn insert(store: &dyn Store, author: &str, title: &str, content: &str) -> i64 {
    let mut article = Article::new(author, title, content);
    store.add_article(&mut article).unwrap()
}

/// Four articles inserted oldest first, so the list shows title4..title1.
fn browse_fixture() -> (AppContext, Navigator) {
    let ctx = AppContext::in_memory().unwrap();
    let long_body = (1..=80)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ");
    for i in 1..=4 {
        insert(
            &*ctx.store,
            &format!("author-{}", i % 2),
            &format!("title{}", i),
            &long_body,
        );
    }

    let mut navigator = build_navigator(ctx.store.clone(), &Config::default()).unwrap();
    navigator.initialize().unwrap();
    (ctx, navigator)
}

fn press(navigator: &mut Navigator, action: Action) -> Effect {
    navigator.dispatch(&Event::Action(action)).unwrap()
}

fn screen(navigator: &Navigator, width: u16) -> String {
    to_plain(&navigator.render(width).unwrap())
}

#[test]
fn test_open_article_and_return_to_selection() {
    let (_ctx, mut navigator) = browse_fixture();

    press(&mut navigator, Action::MoveDown);
    press(&mut navigator, Action::MoveDown);
    assert!(screen(&navigator, 80).contains("> title2"));

    press(&mut navigator, Action::Select);
    let detail = screen(&navigator, 80);
    assert!(!detail.contains("List of Articles"));
    assert!(detail.contains("word1 word2"));

    navigator
        .broadcast(&Event::Resize {
            width: 40,
            height: 15,
        })
        .unwrap();
    // Header and spacer, then the 10-row content viewport.
    for line in screen(&navigator, 40).lines().skip(2).take(10) {
        assert!(display_width(line) <= 40, "{:?}", line);
    }

    press(&mut navigator, Action::Back);
    let list = screen(&navigator, 80);
    assert!(list.contains("List of Articles"));
    assert!(list.contains("> title2"));
    assert!(list.contains("  title4"));
}

/// Lets a test inspect the list while the navigator owns it.
struct SharedList(Rc<RefCell<ListScreen>>);

impl Screen for SharedList {
    fn init(&mut self) -> Effect {
        self.0.borrow_mut().init()
    }

    fn handle_event(&mut self, event: &Event) -> Effect {
        self.0.borrow_mut().handle_event(event)
    }

    fn render(&self, width: u16) -> Text<'static> {
        self.0.borrow().render(width)
    }
}

#[test]
fn test_four_titles_down_twice_enter_resize_escape() {
    let articles = (1..=4)
        .map(|i| {
            let body = (1..=50)
                .map(|w| format!("title{}word{}", i, w))
                .collect::<Vec<_>>()
                .join(" ");
            Article::new("author-1", &format!("title{}", i), &body)
        })
        .collect();
    let list = Rc::new(RefCell::new(ListScreen::new("tester", articles)));

    let mut navigator = Navigator::new("list");
    navigator
        .register_screen("list", Box::new(SharedList(list.clone())))
        .unwrap();
    navigator.initialize().unwrap();

    press(&mut navigator, Action::MoveDown);
    press(&mut navigator, Action::MoveDown);
    assert_eq!(list.borrow().selected_index(), 2);

    press(&mut navigator, Action::Select);
    assert!(list.borrow().is_showing_detail());
    assert_eq!(
        list.borrow().detail().unwrap().article().title,
        "title3"
    );

    navigator
        .dispatch(&Event::Resize {
            width: 40,
            height: 20,
        })
        .unwrap();
    {
        let list = list.borrow();
        let detail = list.detail().unwrap();
        assert_eq!(detail.viewport().width(), 40);
        let content = to_plain(&detail.render());
        assert!(content.starts_with("title3word1 "));
        for line in content.lines() {
            assert!(display_width(line) <= 40, "{:?}", line);
        }
    }

    press(&mut navigator, Action::Back);
    assert_eq!(navigator.active(), "list");
    assert!(!list.borrow().is_showing_detail());
    assert_eq!(list.borrow().selected_index(), 2);
    assert!(screen(&navigator, 80).contains("> title3"));
}

#[test]
fn test_reopening_article_starts_new_session() {
    let (_ctx, mut navigator) = browse_fixture();
    navigator
        .broadcast(&Event::Resize {
            width: 20,
            height: 10,
        })
        .unwrap();

    press(&mut navigator, Action::Select);
    press(&mut navigator, Action::PageDown);
    let scrolled = screen(&navigator, 20);

    assert!(!scrolled.contains(" 0%  •"));

    // Select inside the session only re-flows.
    press(&mut navigator, Action::Select);
    assert_eq!(screen(&navigator, 20), scrolled);

    press(&mut navigator, Action::Back);
    press(&mut navigator, Action::Select);
    assert!(screen(&navigator, 20).contains(" 0%  •"));
}

#[test]
fn test_help_round_trip_preserves_list_state() {
    let (_ctx, mut navigator) = browse_fixture();
    press(&mut navigator, Action::MoveDown);

    press(&mut navigator, Action::Help);
    assert_eq!(navigator.active(), HELP);
    press(&mut navigator, Action::MoveDown);

    press(&mut navigator, Action::Help);
    assert_eq!(navigator.active(), ARTICLES);
    assert!(screen(&navigator, 80).contains("> title3"));
}

#[test]
fn test_refresh_picks_up_new_articles() {
    let (ctx, mut navigator) = browse_fixture();
    assert!(screen(&navigator, 80).contains("4 articles"));

    insert(&*ctx.store, "author-9", "title5", "fresh");
    press(&mut navigator, Action::Refresh);

    let list = screen(&navigator, 80);
    assert!(list.contains("5 articles"));
    assert!(list.contains("title5"));
    // The cursor stays on the article it was on.
    assert!(list.contains("> title4"));
}

#[test]
fn test_author_filter_and_back() {
    let (_ctx, mut navigator) = browse_fixture();

    press(&mut navigator, Action::FilterAuthor);
    let filtered = screen(&navigator, 80);
    assert!(filtered.contains("2 articles"));
    assert!(filtered.contains("author: author-0"));
    assert!(!filtered.contains("title3"));

    press(&mut navigator, Action::Back);
    assert!(screen(&navigator, 80).contains("4 articles"));
}

#[test]
fn test_delete_missing_article_is_ok() {
    let ctx = AppContext::in_memory().unwrap();
    let id = insert(&*ctx.store, "author-1", "gone", "");

    ctx.store.delete_article(id).unwrap();
    ctx.store.delete_article(id).unwrap();
    ctx.store.delete_article(9999).unwrap();
    assert!(ctx.store.get_article(id).unwrap().is_none());
}

#[test]
fn test_list_screen_without_store() {
    let articles = vec![
        Article::new("a", "first", "alpha"),
        Article::new("b", "second", "beta"),
    ];
    let mut navigator = Navigator::new("list");
    navigator
        .register_screen("list", Box::new(ListScreen::new("tester", articles)))
        .unwrap();

    press(&mut navigator, Action::MoveDown);
    press(&mut navigator, Action::Select);
    assert!(screen(&navigator, 80).contains("beta"));
    assert_eq!(press(&mut navigator, Action::Quit), Effect::Quit);
}
