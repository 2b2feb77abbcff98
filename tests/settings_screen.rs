use embassy_futures::block_on;
use embassy_futures::join::join;
use embassy_time::{Instant, Timer};

use pulp_settings::apps::Transition;
use pulp_settings::apps::settings::{
    LaunchError, NavView, NoSubScreens, Persist, Settings, SettingsCell, SettingsScreen,
    SettingsShared, SettingsStore, StoreError, SubScreen, SubScreenHost, run_display,
};
use pulp_settings::board::{Button, ButtonEvent, InputFrame, InputSource};
use pulp_settings::kernel::{Completion, RENDER_PERIOD, ScreenShared, render_pending};
use pulp_settings::ui::{Metrics, Region, Surface, Tab};

#[derive(Default)]
struct SaveCounter {
    saves: usize,
}

impl Persist for SaveCounter {
    fn persist(&mut self, _settings: &Settings) -> Result<(), StoreError> {
        self.saves += 1;
        Ok(())
    }
}

type Store = SettingsCell<SaveCounter>;

fn saves(store: &Store) -> usize {
    store.backend(|b| b.saves)
}

struct Remote<'a> {
    shared: &'a SettingsShared,
    running: Option<Completion<'a>>,
    launched: Vec<SubScreen>,
    lock_held_at_launch: bool,
    polls: usize,
}

impl<'a> Remote<'a> {
    fn new(shared: &'a SettingsShared) -> Self {
        Self {
            shared,
            running: None,
            launched: Vec::new(),
            lock_held_at_launch: false,
            polls: 0,
        }
    }

    fn finish(&mut self) {
        if let Some(done) = self.running.take() {
            done.finish();
        }
    }
}

impl<'a> SubScreenHost<'a> for Remote<'a> {
    fn launch(&mut self, target: SubScreen, done: Completion<'a>) -> Result<(), LaunchError> {
        self.lock_held_at_launch = self.shared.try_lock_render().is_none();
        if self.running.is_some() {
            return Err(LaunchError::Busy);
        }
        self.launched.push(target);
        self.running = Some(done);
        Ok(())
    }

    fn poll<I: InputSource>(&mut self, _input: &I) {
        self.polls += 1;
    }
}

fn press(b: Button) -> InputFrame {
    let mut f = InputFrame::new();
    f.apply(ButtonEvent::Press(b), Instant::from_millis(0));
    f
}

fn release_after(b: Button, ms: u64) -> InputFrame {
    let mut f = press(b);
    f.begin_cycle();
    f.apply(ButtonEvent::Release(b), Instant::from_millis(ms));
    f
}

fn tap(b: Button) -> InputFrame {
    release_after(b, 20)
}

fn run(f: impl FnOnce(&SettingsShared, &Store)) {
    let shared = ScreenShared::new(NavView::initial());
    let store = SettingsCell::new(SaveCounter::default());
    f(&shared, &store);
}

#[test]
fn six_confirms_cycle_sleep_screen_back_with_six_saves() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        block_on(screen.poll(&tap(Button::Down)));
        assert_eq!(screen.navigator().selected(), 1);

        let original = store.snapshot().sleep_screen;
        let mut seen = Vec::new();
        for _ in 0..6 {
            block_on(screen.poll(&press(Button::Confirm)));
            seen.push(store.snapshot().sleep_screen);
        }
        assert_eq!(store.snapshot().sleep_screen, original);
        assert_eq!(seen, [1, 2, 3, 4, 5, 0]);
        assert_eq!(saves(store), 6);
        // focus does not move on confirm
        assert_eq!(screen.navigator().selected(), 1);
    });
}

#[test]
fn screen_margin_wraps_from_max_to_min() {
    run(|shared, store| {
        store.write(|s| s.screen_margin = 40);
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();

        block_on(screen.poll(&press(Button::Confirm)));
        assert_eq!(screen.navigator().category_index(), 1);
        for _ in 0..4 {
            block_on(screen.poll(&tap(Button::Down)));
        }
        assert_eq!(screen.navigator().settings()[3].name, "Screen Margin");

        block_on(screen.poll(&press(Button::Confirm)));
        assert_eq!(store.snapshot().screen_margin, 5);
        assert_eq!(saves(store), 1);
    });
}

#[test]
fn confirm_on_system_tab_wraps_to_display() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        for _ in 0..3 {
            block_on(screen.poll(&press(Button::Confirm)));
        }
        assert_eq!(screen.navigator().category_index(), 3);

        assert_eq!(block_on(screen.poll(&press(Button::Confirm))), Transition::None);
        let nav = screen.navigator();
        assert_eq!(nav.category_index(), 0);
        assert_eq!(nav.count(), 7);
        assert_eq!(nav.selected(), 0);
        assert_eq!(shared.view().category, 0);
        assert_eq!(saves(store), 0);
    });
}

#[test]
fn clear_cache_hands_off_under_render_lock() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, Remote::new(shared));
        screen.on_enter();
        for _ in 0..3 {
            block_on(screen.poll(&press(Button::Confirm)));
        }
        for _ in 0..4 {
            block_on(screen.poll(&tap(Button::Down)));
        }
        assert_eq!(screen.navigator().settings()[3].name, "Clear Cache");

        block_on(screen.poll(&press(Button::Confirm)));
        assert_eq!(screen.host().launched, [SubScreen::ClearCache]);
        assert!(screen.host().lock_held_at_launch);
        assert!(shared.sub_screen_active());
        assert_eq!(saves(store), 1);

        // nothing renders while the sub-screen owns the panel
        shared.take_redraw();
        let mut frames = 0;
        assert!(!block_on(render_pending(shared, &mut |_: NavView| frames += 1)));

        // input goes to the sub-screen, not the list
        block_on(screen.poll(&tap(Button::Down)));
        assert_eq!(screen.host().polls, 1);
        assert_eq!(screen.navigator().selected(), 4);

        screen.host_mut().finish();
        assert!(!shared.sub_screen_active());
        assert!(shared.redraw_pending());
        assert!(block_on(render_pending(shared, &mut |_: NavView| frames += 1)));
        assert_eq!(frames, 1);
    });
}

#[test]
fn refused_action_keeps_screen_in_control() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        block_on(screen.poll(&press(Button::Confirm)));
        block_on(screen.poll(&press(Button::Confirm)));
        block_on(screen.poll(&tap(Button::Down)));
        assert_eq!(screen.navigator().settings()[0].name, "Remap Front Buttons");

        block_on(screen.poll(&press(Button::Confirm)));
        assert!(!shared.sub_screen_active());
        assert!(shared.redraw_pending());
        assert!(shared.try_lock_render().is_some());
    });
}

#[test]
fn back_saves_exactly_once() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        block_on(screen.poll(&tap(Button::Down)));
        block_on(screen.poll(&tap(Button::Down)));

        assert_eq!(block_on(screen.poll(&press(Button::Back))), Transition::Home);
        assert_eq!(saves(store), 1);
    });
}

#[test]
fn ring_wraps_in_every_category() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        for expected in [7, 9, 4, 5] {
            let count = screen.navigator().count();
            assert_eq!(count, expected);

            block_on(screen.poll(&tap(Button::Up)));
            assert_eq!(screen.navigator().selected(), count);
            block_on(screen.poll(&tap(Button::Right)));
            assert_eq!(screen.navigator().selected(), 0);
            block_on(screen.poll(&tap(Button::Left)));
            assert_eq!(screen.navigator().selected(), count);
            block_on(screen.poll(&tap(Button::Down)));
            assert_eq!(screen.navigator().selected(), 0);

            block_on(screen.poll(&press(Button::Confirm)));
        }
    });
}

#[test]
fn hold_gesture_keeps_tab_or_first_row() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();

        block_on(screen.poll(&release_after(Button::Down, 750)));
        assert_eq!(screen.navigator().category_index(), 1);
        assert_eq!(screen.navigator().selected(), 0);

        block_on(screen.poll(&tap(Button::Up)));
        block_on(screen.poll(&tap(Button::Up)));
        assert_eq!(screen.navigator().selected(), 8);
        block_on(screen.poll(&release_after(Button::Up, 750)));
        assert_eq!(screen.navigator().category_index(), 0);
        assert_eq!(screen.navigator().selected(), 1);
        assert_eq!(saves(store), 0);
    });
}

#[test]
fn moves_coalesce_into_one_render_of_latest_view() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();
        for _ in 0..3 {
            block_on(screen.poll(&tap(Button::Down)));
        }

        let mut drawn = Vec::new();
        let mut draw = |v: NavView| drawn.push(v.selected);
        assert!(block_on(render_pending(shared, &mut draw)));
        assert!(!block_on(render_pending(shared, &mut draw)));
        assert_eq!(drawn, [3]);
    });
}

#[derive(Default)]
struct FrameCounter {
    frames: usize,
    rows: usize,
}

impl Surface for FrameCounter {
    fn size(&self) -> (u16, u16) {
        (480, 800)
    }
    fn clear(&mut self) {}
    fn draw_header(&mut self, _area: Region, _title: &str) {}
    fn draw_tab_bar(&mut self, _area: Region, _tabs: &[Tab<'_>], _focused: bool) {}
    fn draw_list_row(&mut self, _area: Region, _label: &str, _value: &str, _selected: bool) {
        self.rows += 1;
    }
    fn draw_button_hints(&mut self, _hints: &[&str; 4]) {}
    fn draw_text(&mut self, _x: u16, _y: u16, _text: &str) {}
    fn text_width(&self, text: &str) -> u16 {
        text.len() as u16 * 8
    }
    fn flush(&mut self) {
        self.frames += 1;
    }
}

#[test]
fn display_task_draws_first_frame_and_stops_on_exit() {
    run(|shared, store| {
        let mut surface = FrameCounter::default();
        let mut screen = SettingsScreen::new(shared, store, NoSubScreens);
        screen.on_enter();

        block_on(join(
            run_display(shared, &mut surface, store, Metrics::classic()),
            async {
                Timer::after(RENDER_PERIOD * 5).await;
                screen.on_exit().await;
            },
        ));

        assert_eq!(surface.frames, 1);
        assert_eq!(surface.rows, 7);
        assert!(shared.is_closing());
    });
}

/// Host whose sub-screens abort straight away, dropping the token.
struct Aborting;

impl<'a> SubScreenHost<'a> for Aborting {
    fn launch(&mut self, _target: SubScreen, _done: Completion<'a>) -> Result<(), LaunchError> {
        Ok(())
    }

    fn poll<I: InputSource>(&mut self, _input: &I) {}
}

#[test]
fn dropped_completion_hands_control_back() {
    run(|shared, store| {
        let mut screen = SettingsScreen::new(shared, store, Aborting);
        screen.on_enter();
        block_on(screen.poll(&press(Button::Confirm)));
        block_on(screen.poll(&press(Button::Confirm)));
        block_on(screen.poll(&tap(Button::Down)));
        assert_eq!(screen.navigator().settings()[0].name, "Remap Front Buttons");

        block_on(screen.poll(&press(Button::Confirm)));
        assert!(!shared.sub_screen_active());
        assert!(shared.redraw_pending());

        assert_eq!(block_on(screen.poll(&press(Button::Back))), Transition::Home);
    });
}

struct FailingDisk {
    attempts: usize,
}

impl Persist for FailingDisk {
    fn persist(&mut self, _settings: &Settings) -> Result<(), StoreError> {
        self.attempts += 1;
        Err(StoreError::Io("sd removed"))
    }
}

#[test]
fn failed_save_keeps_values_and_focus() {
    let shared = ScreenShared::new(NavView::initial());
    let store = SettingsCell::new(FailingDisk { attempts: 0 });
    let mut screen = SettingsScreen::new(&shared, &store, NoSubScreens);
    screen.on_enter();

    // Controls tab, "Long-press Chapter Skip"
    block_on(screen.poll(&press(Button::Confirm)));
    block_on(screen.poll(&press(Button::Confirm)));
    for _ in 0..3 {
        block_on(screen.poll(&tap(Button::Down)));
    }
    assert_eq!(screen.navigator().settings()[2].name, "Long-press Chapter Skip");
    let before = store.snapshot().long_press_chapter_skip;

    assert_eq!(block_on(screen.poll(&press(Button::Confirm))), Transition::None);
    assert_eq!(store.snapshot().long_press_chapter_skip, !before);
    assert_eq!(screen.navigator().category_index(), 2);
    assert_eq!(screen.navigator().selected(), 3);
    assert_eq!(shared.view().selected, 3);

    assert_eq!(block_on(screen.poll(&press(Button::Back))), Transition::Home);
    assert_eq!(store.snapshot().long_press_chapter_skip, !before);
    store.backend(|b| assert_eq!(b.attempts, 2));
}
