//! Interactive showcase for the chat widgets.
//!
//! Keys: Tab / Shift-Tab move focus, Enter activates the focused button or
//! quick reply, Up / Down scroll the transcript, Left / Right switch the
//! carousel slide, q quits. Mouse clicks activate too. Logs go to
//! `chatkit-demo.log` (`RUST_LOG` controls the filter).

use std::io;
use std::sync::Arc;

use chatkit::backend::terminal::RatatuiTerminal;
use chatkit::config::ChatConfig;
use chatkit::core::focus::FocusRing;
use chatkit::core::geom::Pos;
use chatkit::core::id::IdPath;
use chatkit::core::painter::Painter;
use chatkit::core::tree::{Node, NodeKind, Sense, UiTree};
use chatkit::core::widget::{Ui, Widget};
use chatkit::message::{Button, CardData, ImageSource, Message, MessageBody, QuickReply};
use chatkit::widgets::carousel::Carousel;
use chatkit::widgets::transcript::{Transcript, TranscriptScroll};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use tracing_subscriber::EnvFilter;

const TRANSCRIPT_LAYER: u8 = 0;
const CAROUSEL_LAYER: u8 = 1;

struct DemoApp {
    messages: Vec<Message>,
    replies: Vec<QuickReply>,
    slides: Vec<CardData>,
    active_slide: usize,
    scroll: TranscriptScroll,
    focus: FocusRing,
}

impl DemoApp {
    fn new() -> Self {
        let replies = vec![
            QuickReply::new("Yes, please", "confirm"),
            QuickReply::new("Not now", "dismiss"),
            QuickReply::new("Talk to a human", "handover"),
        ];
        Self {
            messages: seed_messages(&replies),
            replies,
            slides: seed_slides(),
            active_slide: 0,
            scroll: TranscriptScroll::new(),
            focus: FocusRing::new(),
        }
    }

    fn activate(&mut self, node: Node) {
        let appended = match node.kind {
            NodeKind::Button { card, index } => {
                let data = if node.layer == CAROUSEL_LAYER {
                    self.slides.get(card as usize)
                } else {
                    self.messages.get(card as usize).and_then(|m| match &m.body {
                        MessageBody::Card { card } => Some(card),
                        _ => None,
                    })
                };
                data.and_then(|c| c.buttons.get(index)).map(|b| match b {
                    Button::Url(b) => Message::system(format!("Opening {} ...", b.url)),
                    Button::PostBack(b) => Message::user(b.label.as_str()),
                })
            }
            NodeKind::QuickReply { index } => self
                .replies
                .get(index)
                .map(|r| Message::user(r.label.as_str())),
            _ => None,
        };
        if let Some(msg) = appended {
            self.messages.push(msg);
            self.scroll.stick();
        }
    }
}

fn seed_messages(replies: &[QuickReply]) -> Vec<Message> {
    vec![
        Message::system("Connected to the demo bot.").with_timestamp("09:00"),
        Message::bot("Hello! I can show cards, images and quick replies.").with_timestamp("09:00"),
        Message::user("Show me what you have.").with_timestamp("09:01"),
        Message::bot_markdown("Here is our current *featured* product:"),
        Message::bot_card(
            CardData::new("Espresso Machine")
                .with_subtitle("Compact, 15 bar, steam wand")
                .with_cover(
                    ImageSource::new("https://shop.example/espresso.png")
                        .with_alt("Espresso machine"),
                )
                .with_button(Button::url("View online", "https://shop.example/espresso"))
                .with_button(Button::post_back("Add to cart", "cart:add:espresso")),
        )
        .with_timestamp("09:01"),
        Message::bot_image(
            ImageSource::new("https://shop.example/banner.png").with_alt("Seasonal sale banner"),
        ),
        Message::quick_replies(Some("Anything else?".to_string()), replies.to_vec()),
    ]
}

fn seed_slides() -> Vec<CardData> {
    vec![
        CardData::new("Burr Grinder")
            .with_subtitle("Conical, 40 mm")
            .with_button(Button::post_back("Add to cart", "cart:add:grinder")),
        CardData::new("Gooseneck Kettle")
            .with_subtitle("0.9 l, variable temperature")
            .with_button(Button::post_back("Add to cart", "cart:add:kettle")),
        CardData::new("Precision Scale")
            .with_subtitle("0.1 g resolution, timer")
            .with_button(Button::url("View online", "https://shop.example/scale"))
            .with_button(Button::post_back("Add to cart", "cart:add:scale")),
    ]
}

fn init_logging() {
    let Ok(file) = std::fs::File::create("chatkit-demo.log") else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}

fn main() -> io::Result<()> {
    init_logging();

    let config = ChatConfig::new();
    let theme = config.terminal_theme();
    let renderers = &config.renderers;
    let ids = IdPath::root("chatkit-demo");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = RatatuiTerminal::new(stdout)?;

    let mut app = DemoApp::new();
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut should_quit = false;

    while !should_quit {
        let focused = app.focus.current();
        let active = app.active_slide;

        terminal.draw(|backend, area| {
            painter.clear();
            tree.clear();

            let mut ui = Ui::new(area, &mut painter, &mut tree, &theme, renderers);

            let mut carousel = Carousel {
                id_base: ids.push_str("carousel"),
                layer: CAROUSEL_LAYER,
                cards: &app.slides,
                active,
                focused,
                custom_style: None,
            };
            let carousel_h = carousel.measure(renderers, area.w).min(area.h / 2);
            let carousel_rect = ui.take_bottom(carousel_h);

            let mut transcript = Transcript {
                id_base: ids.push_str("transcript"),
                layer: TRANSCRIPT_LAYER,
                messages: &app.messages,
                scroll: &mut app.scroll,
                focused,
            };
            transcript.ui(&mut ui);
            ui.with_rect(carousel_rect, |ui| carousel.ui(ui));

            backend.draw(area, painter.cmds());
            backend.set_cursor(None);
        })?;

        app.focus.sync(&tree);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => should_quit = true,
                KeyCode::Tab => app.focus.focus_next(&tree),
                KeyCode::BackTab => app.focus.focus_prev(&tree),
                KeyCode::Up => app.scroll.scroll_up(1),
                KeyCode::Down => app.scroll.scroll_down(1),
                KeyCode::End => app.scroll.stick(),
                KeyCode::Left => {
                    app.active_slide = app.active_slide.saturating_sub(1);
                }
                KeyCode::Right => {
                    app.active_slide =
                        (app.active_slide + 1).min(app.slides.len().saturating_sub(1));
                }
                KeyCode::Enter => {
                    if let Some(node) = app.focus.current().and_then(|id| tree.node(id)).copied() {
                        app.activate(node);
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let pos = Pos::new(mouse.column, mouse.row);
                    if let Some(node) = tree.hit_test_with_sense(pos, Sense::CLICK).copied() {
                        app.activate(node);
                    }
                }
            }
            _ => {}
        }
    }

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
