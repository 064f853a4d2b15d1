use crate::input::{handle_key_event, pointer_kind, InputAction};
use crate::pane::layout::Rect;
use crate::pane::PaneSet;
use anyhow::{Context, Result};
use crossbeam_channel::Receiver;
use drag_scroll::config::Config;
use drag_scroll::PointerKind;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowAttributes, WindowId};

struct WindowState {
    window: Arc<Window>,
    panes: PaneSet,
    cursor_pos: (f32, f32),
    config_rx: Option<Receiver<()>>,
    _config_watcher: Option<RecommendedWatcher>,
}

impl WindowState {
    fn window_rect(&self) -> Rect {
        let size = self.window.inner_size();
        Rect::new(0.0, 0.0, size.width as f32, size.height as f32)
    }

    fn update_title(&self, config: &Config) {
        let offsets = self
            .panes
            .offsets()
            .iter()
            .map(|o| format!("{:.0}", o))
            .collect::<Vec<_>>()
            .join(" / ");
        self.window.set_title(&format!("{} [{}]", config.window.title, offsets));
    }

    /// Rebuild every pane from `config`. The old engines are detached first,
    /// so a coast in flight never touches the new strips.
    fn rebuild(&mut self, config: &Config) -> Result<()> {
        self.panes.teardown();
        self.panes = PaneSet::new(config, self.window_rect())?;
        Ok(())
    }
}

/// Watch the directory holding `path` and signal on `Receiver` whenever the
/// file itself is created or modified. Bursts of events collapse into one
/// pending signal.
fn watch_config(path: PathBuf) -> Result<(RecommendedWatcher, Receiver<()>)> {
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .context("config path has no parent directory")?;
    let (tx, rx) = crossbeam_channel::bounded::<()>(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let Ok(event) = res else {
            return;
        };
        let touched = event.kind.is_modify() || event.kind.is_create();
        if touched && event.paths.contains(&path) {
            let _ = tx.try_send(());
        }
    })
    .context("creating config watcher")?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", dir.display()))?;
    Ok((watcher, rx))
}

pub struct App {
    state: Option<WindowState>,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { state: None, config }
    }

    fn create_window_state(event_loop: &ActiveEventLoop, config: &Config) -> Result<WindowState> {
        let attrs = WindowAttributes::default()
            .with_title(config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ));
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let size = window.inner_size();
        let rect = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
        let panes = PaneSet::new(config, rect)?;

        let (config_watcher, config_rx) = match watch_config(Config::config_path()) {
            Ok((watcher, rx)) => (Some(watcher), Some(rx)),
            Err(e) => {
                log::warn!("config hot reload disabled: {:#}", e);
                (None, None)
            }
        };

        Ok(WindowState {
            window,
            panes,
            cursor_pos: (0.0, 0.0),
            config_rx,
            _config_watcher: config_watcher,
        })
    }

    fn reload_config(&mut self) {
        self.config = Config::load_or_default();
        if let Some(state) = self.state.as_mut() {
            if let Err(e) = state.rebuild(&self.config) {
                log::warn!("Failed to apply reloaded config: {:#}", e);
            }
            state.update_title(&self.config);
        }
        log::info!("config reloaded ({} panes)", self.config.panes.len());
    }

    fn apply_key(&mut self, action: InputAction) {
        if action == InputAction::ReloadConfig {
            self.reload_config();
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let (x, y) = state.cursor_pos;
        let Some(pane) = state.panes.pane_at_mut(x, y) else {
            return;
        };
        match action {
            InputAction::StepForward => pane.engine.step_forward(),
            InputAction::StepBackward => pane.engine.step_backward(),
            InputAction::ScrollToStart => pane.engine.scroll_to(0.0),
            InputAction::ScrollToEnd => pane.engine.scroll_to_end(),
            InputAction::ReloadConfig | InputAction::None => {}
        }
        state.update_title(&self.config);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match Self::create_window_state(event_loop, &self.config) {
            Ok(state) => {
                state.update_title(&self.config);
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let reload = self
            .state
            .as_ref()
            .and_then(|s| s.config_rx.as_ref())
            .is_some_and(|rx| rx.try_recv().is_ok());
        if reload {
            self.reload_config();
        }

        let Some(state) = self.state.as_mut() else {
            return;
        };
        let now = Instant::now();
        let before = state.panes.offsets();
        state.panes.tick(now);
        if state.panes.offsets() != before {
            state.update_title(&self.config);
        }
        match state.panes.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(mut state) = self.state.take() {
                    state.panes.teardown();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(state) = self.state.as_mut() {
                    let rect = Rect::new(0.0, 0.0, new_size.width as f32, new_size.height as f32);
                    state.panes.resize(rect);
                }
            }

            WindowEvent::Focused(false) => {
                if let Some(state) = self.state.as_mut() {
                    state.panes.cancel(Instant::now());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let action = handle_key_event(&event);
                self.apply_key(action);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(state) = self.state.as_mut() {
                    let (x, y) = (position.x as f32, position.y as f32);
                    state.cursor_pos = (x, y);
                    state.panes.pointer_move(x, y, Instant::now());
                    state.update_title(&self.config);
                }
            }

            WindowEvent::MouseInput { state: button_state, button, .. } => {
                let Some(kind) = pointer_kind(button_state, button) else {
                    return;
                };
                if let Some(state) = self.state.as_mut() {
                    let (x, y) = state.cursor_pos;
                    let now = Instant::now();
                    match kind {
                        PointerKind::Down => state.panes.pointer_down(x, y, now),
                        _ => {
                            if let Some(click) = state.panes.pointer_up(x, y, now) {
                                log::info!("card click: pane {} card {}", click.pane, click.card);
                            }
                        }
                    }
                }
            }

            _ => {}
        }
    }
}
