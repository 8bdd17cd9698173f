use iced::{keyboard, window, Size, Subscription, Task};

use pytext_core::{Config, EditorShell, Keymap, Menubar};

pub mod file_ops;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

pub struct App {
    pub shell: EditorShell<EditorBuffer>,
    pub keymap: Keymap,
    pub menubar: Menubar,
    /// Index into `menubar.menus()` of the open dropdown.
    pub active_menu: Option<usize>,
    pub dialog: Option<Dialog>,
    pub config: Config,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let keymap = Keymap::default();
        let menubar = Menubar::new(&keymap);

        let mut app = Self {
            shell: EditorShell::new(EditorBuffer::default()),
            keymap,
            menubar,
            active_menu: None,
            dialog: None,
            config: flags.config,
        };

        if let Some(path) = flags.file {
            if let Err(e) = app.shell.open_file(Some(path)) {
                app.report("Open failed", &e);
            }
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.shell.title()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        Subscription::batch([
            keyboard_sub,
            window::close_requests().map(|_| Message::CloseRequested),
        ])
    }

    /// Window-close teardown. The shell holds no open handles, so this
    /// only logs and stops the runtime.
    pub fn teardown(&mut self) -> Task<Message> {
        self.active_menu = None;
        self.dialog = None;
        tracing::info!("Closing {}", self.shell.title());
        iced::exit()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let window = window::Settings {
        size: Size::new(flags.config.window.width, flags.config.window.height),
        exit_on_close_request: false,
        ..Default::default()
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window(window)
        .theme(|_| iced::Theme::Dark)
        .run_with(move || App::new(flags))
}
