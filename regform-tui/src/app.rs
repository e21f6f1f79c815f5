//! Application state and key handling, independent of the terminal.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use regform_core::{
    Field, FieldStatus, FormSync, PasswordStrength, Scheduler, SubmitOutcome, ValidationReport,
    submit,
};

use crate::banner::Banner;
use crate::editor::{EditAction, LineEditor};

/// Delay between an accepted submission and the automatic form reset.
pub const RESET_DELAY: Duration = Duration::from_millis(2000);
/// How long a rejected field shakes.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Timed effects applied when their deadline passes. Scheduling is
/// fire-and-forget: nothing is cancelled, and overlapping submissions stack
/// their effects independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    ClearBanner(u64),
    ResetForm,
    StopShake(Field),
}

/// One stop in the Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    Submit,
    Clear,
}

const FOCUS_RING: [FocusTarget; 11] = [
    FocusTarget::Field(Field::Username),
    FocusTarget::Field(Field::Email),
    FocusTarget::Field(Field::Password),
    FocusTarget::Field(Field::ConfirmPassword),
    FocusTarget::Field(Field::Phone),
    FocusTarget::Field(Field::Age),
    FocusTarget::Field(Field::Website),
    FocusTarget::Field(Field::Bio),
    FocusTarget::Field(Field::Terms),
    FocusTarget::Submit,
    FocusTarget::Clear,
];

/// Everything the renderer needs, driven entirely by key events and
/// scheduler deadlines so it can be exercised without a terminal.
#[derive(Default)]
pub struct App {
    sync: FormSync,
    editors: HashMap<Field, LineEditor>,
    bio_touched: bool,
    focus: usize,
    shaking: HashSet<Field>,
    banners: Vec<(u64, Banner)>,
    next_banner_id: u64,
    scheduler: Scheduler<UiEffect>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Renderer accessors
    // ------------------------------------------------------------------

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> FocusTarget {
        FOCUS_RING[self.focus]
    }

    pub fn text(&self, field: Field) -> &str {
        self.editors.get(&field).map(|e| e.text()).unwrap_or("")
    }

    pub fn cursor(&self, field: Field) -> usize {
        self.editors.get(&field).map(|e| e.cursor()).unwrap_or(0)
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        self.sync.status(field)
    }

    pub fn strength(&self) -> PasswordStrength {
        self.sync.strength()
    }

    pub fn report(&self) -> &ValidationReport {
        self.sync.report()
    }

    pub fn terms_accepted(&self) -> bool {
        self.sync.state().terms
    }

    /// True once the bio has been edited since the last reset. The preview
    /// panel keeps its placeholder until then, even though an edited bio can
    /// be empty again.
    pub fn bio_touched(&self) -> bool {
        self.bio_touched
    }

    pub fn is_shaking(&self, field: Field) -> bool {
        self.shaking.contains(&field)
    }

    pub fn banners(&self) -> &[(u64, Banner)] {
        &self.banners
    }

    /// Earliest pending timed effect; the event loop sleeps until this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key presses; some terminals report release and repeat
        // events too, and acting on those doubles every keystroke.
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit_form(now);
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.clear_form();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FOCUS_RING.len();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FOCUS_RING.len() - 1) % FOCUS_RING.len();
                return;
            }
            _ => {}
        }

        match FOCUS_RING[self.focus] {
            FocusTarget::Field(Field::Terms) => match key.code {
                KeyCode::Char(' ') => self.toggle_terms(),
                KeyCode::Enter => self.submit_form(now),
                _ => {}
            },
            FocusTarget::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit_form(now);
                }
            }
            FocusTarget::Clear => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.clear_form();
                }
            }
            FocusTarget::Field(field) => {
                // Enter anywhere in a text field submits the form.
                if key.code == KeyCode::Enter {
                    self.submit_form(now);
                    return;
                }
                let editor = self.editors.entry(field).or_insert_with(LineEditor::new);
                if editor.handle_key(key) == EditAction::Edited {
                    if field == Field::Bio {
                        self.bio_touched = true;
                    }
                    let value = editor.text().to_string();
                    self.sync.set_text(field, value);
                }
            }
        }
    }

    /// Apply every timed effect whose deadline has passed.
    pub fn apply_due_effects(&mut self, now: Instant) {
        for effect in self.scheduler.pop_due(now) {
            debug!("[effect] {:?}", effect);
            match effect {
                UiEffect::ClearBanner(id) => self.banners.retain(|(bid, _)| *bid != id),
                UiEffect::ResetForm => self.reset_form(),
                UiEffect::StopShake(field) => {
                    self.shaking.remove(&field);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    fn toggle_terms(&mut self) {
        let accepted = !self.sync.state().terms;
        self.sync.set_terms(accepted);
    }

    fn submit_form(&mut self, now: Instant) {
        match submit(self.sync.state()) {
            SubmitOutcome::Accepted(sanitized) => {
                self.show_banner(
                    Banner::success("Form submitted successfully!", sanitized.to_pretty_json()),
                    now,
                );
                self.scheduler
                    .schedule_after(now, RESET_DELAY, UiEffect::ResetForm);
            }
            SubmitOutcome::Rejected { invalid } => {
                self.show_banner(
                    Banner::error("Please fix the validation errors before submitting."),
                    now,
                );
                for field in invalid {
                    self.shaking.insert(field);
                    self.scheduler
                        .schedule_after(now, SHAKE_DURATION, UiEffect::StopShake(field));
                }
            }
        }
    }

    fn clear_form(&mut self) {
        self.reset_form();
        info!("form cleared");
    }

    fn reset_form(&mut self) {
        self.sync.reset();
        self.editors.clear();
        self.bio_touched = false;
    }

    fn show_banner(&mut self, banner: Banner, now: Instant) {
        let id = self.next_banner_id;
        self.next_banner_id += 1;
        self.scheduler
            .schedule_after(now, banner.lifetime(), UiEffect::ClearBanner(id));
        self.banners.push((id, banner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BannerLevel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            kind,
            ..KeyEvent::new(code, KeyModifiers::NONE)
        }
    }

    fn type_str(app: &mut App, now: Instant, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    /// Tab forward until the target has focus.
    fn focus_field(app: &mut App, target: FocusTarget) {
        for _ in 0..FOCUS_RING.len() {
            if app.focus() == target {
                return;
            }
            app.handle_key(key(KeyCode::Tab), Instant::now());
        }
        panic!("focus target not reachable");
    }

    fn fill_valid_form(app: &mut App, now: Instant) {
        type_str(app, now, "test123");
        app.handle_key(key(KeyCode::Tab), now);
        type_str(app, now, "test@example.com");
        app.handle_key(key(KeyCode::Tab), now);
        type_str(app, now, "TestPass123");
        app.handle_key(key(KeyCode::Tab), now);
        type_str(app, now, "TestPass123");
        app.handle_key(key(KeyCode::Tab), now);
        type_str(app, now, "0812345678");
        app.handle_key(key(KeyCode::Tab), now);
        type_str(app, now, "25");
        focus_field(app, FocusTarget::Field(Field::Bio));
        type_str(app, now, "<script>alert(1)</script>");
        focus_field(app, FocusTarget::Field(Field::Terms));
        app.handle_key(key(KeyCode::Char(' ')), now);
    }

    #[test]
    fn test_focus_ring_covers_every_text_field_in_order() {
        let ring_fields: Vec<Field> = FOCUS_RING
            .iter()
            .filter_map(|target| match target {
                FocusTarget::Field(field) => Some(*field),
                _ => None,
            })
            .collect();
        let mut expected = Field::TEXT.to_vec();
        expected.push(Field::Terms);
        assert_eq!(ring_fields, expected);
    }

    #[test]
    fn test_typing_drives_validation() {
        let mut app = App::new();
        let now = Instant::now();

        type_str(&mut app, now, "ab");
        assert_eq!(app.status(Field::Username), FieldStatus::Invalid);
        type_str(&mut app, now, "c");
        assert_eq!(app.status(Field::Username), FieldStatus::Valid);
        assert_eq!(app.text(Field::Username), "abc");
        assert_eq!(app.report().entries().len(), 1);
    }

    #[test]
    fn test_tab_cycles_and_wraps() {
        let mut app = App::new();
        assert_eq!(app.focus(), FocusTarget::Field(Field::Username));

        for _ in 0..FOCUS_RING.len() {
            app.handle_key(key(KeyCode::Tab), Instant::now());
        }
        assert_eq!(app.focus(), FocusTarget::Field(Field::Username));

        app.handle_key(key(KeyCode::BackTab), Instant::now());
        assert_eq!(app.focus(), FocusTarget::Clear);
    }

    #[test]
    fn test_non_press_key_events_are_ignored() {
        let mut app = App::new();
        let now = Instant::now();

        // Terminals with release reporting deliver every keystroke twice.
        app.handle_key(key(KeyCode::Char('a')), now);
        app.handle_key(with_kind(KeyCode::Char('a'), KeyEventKind::Release), now);
        app.handle_key(with_kind(KeyCode::Char('a'), KeyEventKind::Repeat), now);
        assert_eq!(app.text(Field::Username), "a");

        app.handle_key(with_kind(KeyCode::Tab, KeyEventKind::Release), now);
        assert_eq!(app.focus(), FocusTarget::Field(Field::Username));

        // A press-release pair must not toggle the checkbox twice.
        focus_field(&mut app, FocusTarget::Field(Field::Terms));
        app.handle_key(key(KeyCode::Char(' ')), now);
        app.handle_key(with_kind(KeyCode::Char(' '), KeyEventKind::Release), now);
        assert!(app.terms_accepted());
    }

    #[test]
    fn test_space_toggles_terms_checkbox() {
        let mut app = App::new();
        focus_field(&mut app, FocusTarget::Field(Field::Terms));

        app.handle_key(key(KeyCode::Char(' ')), Instant::now());
        assert!(app.terms_accepted());
        app.handle_key(key(KeyCode::Char(' ')), Instant::now());
        assert!(!app.terms_accepted());
    }

    #[test]
    fn test_space_in_text_field_is_just_a_character() {
        let mut app = App::new();
        type_str(&mut app, Instant::now(), "a b");
        assert_eq!(app.text(Field::Username), "a b");
    }

    #[test]
    fn test_accepted_submission_banner_then_reset() {
        let mut app = App::new();
        let now = Instant::now();
        fill_valid_form(&mut app, now);

        app.handle_key(ctrl('s'), now);
        assert_eq!(app.banners().len(), 1);
        let (_, banner) = &app.banners()[0];
        assert_eq!(banner.level, BannerLevel::Success);
        assert_eq!(banner.title, "Form submitted successfully!");
        let body = banner.body.as_deref().unwrap_or("");
        assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

        // Values survive until the reset deadline.
        app.apply_due_effects(now + RESET_DELAY - Duration::from_millis(1));
        assert_eq!(app.text(Field::Username), "test123");

        app.apply_due_effects(now + RESET_DELAY);
        assert_eq!(app.text(Field::Username), "");
        assert_eq!(app.status(Field::Username), FieldStatus::Unset);
        assert!(app.report().is_empty());
        assert!(!app.terms_accepted());

        // The banner outlives the reset and expires on its own deadline.
        assert_eq!(app.banners().len(), 1);
        app.apply_due_effects(now + Duration::from_millis(5000));
        assert!(app.banners().is_empty());
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_rejected_submission_shakes_offenders_only() {
        let mut app = App::new();
        let now = Instant::now();
        fill_valid_form(&mut app, now);

        // Break one field, then submit.
        focus_field(&mut app, FocusTarget::Field(Field::Age));
        app.handle_key(key(KeyCode::Backspace), now);
        app.handle_key(key(KeyCode::Backspace), now);
        type_str(&mut app, now, "0");
        app.handle_key(ctrl('s'), now);

        assert_eq!(app.banners().len(), 1);
        assert_eq!(app.banners()[0].1.level, BannerLevel::Error);
        assert!(app.is_shaking(Field::Age));
        assert!(!app.is_shaking(Field::Username));

        // Nothing was lost.
        assert_eq!(app.text(Field::Username), "test123");

        app.apply_due_effects(now + SHAKE_DURATION);
        assert!(!app.is_shaking(Field::Age));

        // The error banner expires at 3000ms.
        app.apply_due_effects(now + Duration::from_millis(3000));
        assert!(app.banners().is_empty());
    }

    #[test]
    fn test_enter_in_a_text_field_submits() {
        let mut app = App::new();
        let now = Instant::now();
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.banners().len(), 1);
        assert_eq!(app.banners()[0].1.level, BannerLevel::Error);
    }

    #[test]
    fn test_clear_resets_immediately() {
        let mut app = App::new();
        let now = Instant::now();
        fill_valid_form(&mut app, now);

        app.handle_key(ctrl('r'), now);
        assert_eq!(app.text(Field::Username), "");
        assert_eq!(app.text(Field::Bio), "");
        assert!(!app.terms_accepted());
        assert!(app.report().is_empty());
    }

    #[test]
    fn test_bio_touched_tracks_edits_until_reset() {
        let mut app = App::new();
        let now = Instant::now();
        assert!(!app.bio_touched());

        focus_field(&mut app, FocusTarget::Field(Field::Bio));
        type_str(&mut app, now, "x");
        app.handle_key(key(KeyCode::Backspace), now);
        assert_eq!(app.text(Field::Bio), "");
        assert!(app.bio_touched(), "an emptied bio stays touched");

        app.handle_key(ctrl('r'), now);
        assert!(!app.bio_touched());
    }

    #[test]
    fn test_racing_submissions_both_reset() {
        let mut app = App::new();
        let t0 = Instant::now();
        fill_valid_form(&mut app, t0);
        app.handle_key(ctrl('s'), t0);

        // Submit again while the first reset is still pending.
        let t1 = t0 + Duration::from_millis(1000);
        app.handle_key(ctrl('s'), t1);
        assert_eq!(app.banners().len(), 2);

        // The first reset clears the form; the second finds it already empty.
        app.apply_due_effects(t0 + RESET_DELAY);
        assert_eq!(app.text(Field::Age), "");
        app.apply_due_effects(t1 + RESET_DELAY);
        assert_eq!(app.text(Field::Age), "");
        assert_eq!(app.banners().len(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Esc), Instant::now());
        assert!(app.should_quit());

        let mut app = App::new();
        app.handle_key(ctrl('c'), Instant::now());
        assert!(app.should_quit());
    }
}
