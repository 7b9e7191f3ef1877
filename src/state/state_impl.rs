use crate::app::TimerSender;
use crate::events::timer::{Event, Timer};
use crate::form::{self, Effect, FormInput};
use crate::pages::auth::{redirect_for, AuthAction};
use crate::pages::{Page, AUDIENCES};
use crate::session::SessionStore;
use crate::ui::Theme;
use crate::wizard::{Advance, Retreat, StepEditor, Wizard, WizardStep};
use log::*;

use super::error::StateError;
use super::navigation::Route;
use super::notice::{Notice, NoticeKind};

const MAX_LOG_ENTRIES: usize = 1000;
const MAX_HISTORY: usize = 100;
const DEFAULT_NOTICE_TTL: u16 = 50;

static HOME: Route = Route::Home;

/// Houses data representative of application state.
///
/// The session store lives here and is only ever handed out by reference,
/// so every page reads and mutates the same onboarding data.
///
pub struct State {
    timer_sender: Option<TimerSender>,
    session: SessionStore,
    history: Vec<Route>,
    page: Page,
    focus: usize,
    epoch: u64,
    pending: Option<Event>,
    notice: Option<Notice>,
    notice_ttl: u16,
    log_visible: bool,
    log_entries: Vec<String>,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            timer_sender: None,
            session: SessionStore::new(),
            history: vec![Route::Home],
            page: Page::Landing,
            focus: 0,
            epoch: 0,
            pending: None,
            notice: None,
            notice_ttl: DEFAULT_NOTICE_TTL,
            log_visible: false,
            log_entries: vec![],
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new instance with the given timer sender.
    ///
    pub fn new(timer_sender: TimerSender, theme: Theme, notice_ttl: u16) -> Self {
        State {
            timer_sender: Some(timer_sender),
            theme,
            notice_ttl: notice_ttl.max(1),
            ..State::default()
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn route(&self) -> &Route {
        self.history.last().unwrap_or(&HOME)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a simulated operation is in flight.
    ///
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Event> {
        self.pending.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn log_entries(&self) -> &[String] {
        &self.log_entries
    }

    /// Whether typed characters go into a text field.
    ///
    pub fn is_typing(&self) -> bool {
        self.page.is_typing(self.focus)
    }

    /// Show the page for `route`. Timers dispatched from the previous view
    /// are cancelled.
    ///
    pub fn navigate(&mut self, route: Route) {
        info!("Navigating to '{}'...", route.path());
        self.cancel_timers();
        self.page = Page::for_route(&route, &self.session);
        self.focus = 0;
        self.history.push(route);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
    }

    /// Return to the previous route. Returns false when there is none.
    ///
    pub fn go_back_page(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        self.cancel_timers();
        let route = self.route().clone();
        debug!("Going back to '{}'...", route.path());
        self.page = Page::for_route(&route, &self.session);
        self.focus = 0;
        true
    }

    pub fn next_field(&mut self) {
        let count = self.page.field_count();
        self.focus = if count == 0 {
            0
        } else {
            (self.focus + 1) % count
        };
    }

    pub fn previous_field(&mut self) {
        let count = self.page.field_count();
        self.focus = if count == 0 {
            0
        } else {
            (self.focus + count - 1) % count
        };
    }

    /// Route input to the page on screen.
    ///
    pub fn input(&mut self, input: FormInput) {
        match self.page {
            Page::Landing => {
                if input == FormInput::Activate {
                    self.navigate(Route::Onboarding);
                }
            }
            Page::Onboarding => match input {
                FormInput::Next => self.next_field(),
                FormInput::Previous => self.previous_field(),
                FormInput::Activate => self.choose_audience(),
                _ => {}
            },
            Page::Auth(_) => self.auth_input(input),
            Page::Wizard(_) => self.wizard_input(input),
            Page::PostJob(_) => self.job_input(input),
            Page::FreelancerDashboard => {
                if input == FormInput::Activate {
                    self.navigate(Route::FreelancerPortfolio);
                }
            }
            Page::ClientDashboard => {
                if input == FormInput::Activate {
                    self.navigate(Route::ClientPostJob);
                }
            }
            Page::NotFound(_) => {
                if input == FormInput::Activate {
                    self.navigate(Route::Home);
                }
            }
        }
    }

    fn choose_audience(&mut self) {
        let user_type = match AUDIENCES.get(self.focus) {
            Some(user_type) => *user_type,
            None => return,
        };
        self.session.set_user_type(user_type);
        self.navigate(Route::Auth(user_type.as_str().to_string()));
    }

    fn auth_input(&mut self, input: FormInput) {
        let Page::Auth(auth) = &mut self.page else {
            return;
        };
        match form::handle_input(auth, self.focus, input, self.session.id_generator()) {
            Ok(Effect::Submit) => self.submit_auth(),
            Ok(Effect::Patch(AuthAction::SocialLogin(provider))) => self.set_notice(
                NoticeKind::Info,
                format!("{} login not implemented yet", provider),
            ),
            Ok(Effect::None) => {}
            Err(e) => self.set_notice(NoticeKind::Error, e.to_string()),
        }
    }

    /// Validate the auth form and start the simulated sign-in.
    ///
    pub fn submit_auth(&mut self) {
        if self.is_busy() {
            return;
        }
        let Page::Auth(auth) = &self.page else {
            return;
        };
        match auth.validate() {
            Ok(()) => {
                let event = Event::SignIn {
                    audience: auth.audience().to_string(),
                    mode: auth.mode(),
                };
                self.dispatch_or_notify(event);
            }
            Err(e) => self.set_notice(NoticeKind::Error, e.to_string()),
        }
    }

    fn wizard_input(&mut self, input: FormInput) {
        let Page::Wizard(editor) = &mut self.page else {
            return;
        };
        if editor.step() == WizardStep::Review && input == FormInput::Activate {
            self.wizard_next();
            return;
        }
        match editor.handle(self.focus, input, self.session.id_generator()) {
            Ok(Some(patch)) => {
                self.session.merge_freelancer_draft(patch);
            }
            Ok(None) => {}
            Err(e) => self.set_notice(NoticeKind::Error, e.to_string()),
        }
    }

    fn job_input(&mut self, input: FormInput) {
        let Page::PostJob(job) = &mut self.page else {
            return;
        };
        match form::handle_input(job, self.focus, input, self.session.id_generator()) {
            Ok(Effect::Patch(patch)) => {
                self.session.merge_client_job_draft(patch);
            }
            Ok(Effect::Submit) => self.submit_job(),
            Ok(Effect::None) => {}
            Err(e) => self.set_notice(NoticeKind::Error, e.to_string()),
        }
    }

    /// Validate the job form, store the submission and start the simulated
    /// post. A rejected form leaves the job draft untouched.
    ///
    pub fn submit_job(&mut self) {
        if self.is_busy() {
            return;
        }
        let Page::PostJob(job) = &self.page else {
            return;
        };
        if let Err(e) = job.validate() {
            warn!("Job post rejected: {:?}", e);
            self.set_notice(NoticeKind::Error, e.to_string());
            return;
        }
        let patch = job.submission_patch();
        self.session.merge_client_job_draft(patch);
        self.dispatch_or_notify(Event::PostJob);
    }

    fn open_step(&mut self, step: WizardStep) {
        self.page = Page::Wizard(StepEditor::for_step(step, self.session.freelancer_draft()));
        self.focus = 0;
    }

    /// Advance the wizard, publishing from the last step. Ignored while a
    /// save or publish is in flight.
    ///
    pub fn wizard_next(&mut self) {
        if !matches!(self.page, Page::Wizard(_)) || self.is_busy() {
            return;
        }
        match Wizard::go_next(&mut self.session) {
            Advance::Step(step) => self.open_step(step),
            Advance::Publish => {
                match serde_json::to_string(self.session.freelancer_draft()) {
                    Ok(json) => debug!("Publishing freelancer profile: {}", json),
                    Err(e) => warn!("Failed to serialize freelancer draft: {}", e),
                }
                self.dispatch_or_notify(Event::PublishProfile);
            }
        }
    }

    pub fn wizard_back(&mut self) {
        if !matches!(self.page, Page::Wizard(_)) || self.is_busy() {
            return;
        }
        match Wizard::go_back(&mut self.session) {
            Retreat::Step(step) => self.open_step(step),
            Retreat::LeaveWizard => self.navigate(Route::Auth("freelancer".to_string())),
        }
    }

    /// Start the simulated draft save. Nothing is persisted.
    ///
    pub fn save_draft(&mut self) {
        if !matches!(self.page, Page::Wizard(_)) || self.is_busy() {
            return;
        }
        self.dispatch_or_notify(Event::SaveDraft);
    }

    /// Reset the session and return to the landing page.
    ///
    pub fn start_over(&mut self) {
        self.session.reset();
        self.history.clear();
        self.navigate(Route::Home);
        self.set_notice(NoticeKind::Info, "Session reset".to_string());
    }

    fn dispatch_or_notify(&mut self, event: Event) {
        if let Err(e) = self.dispatch(event) {
            self.set_notice(NoticeKind::Error, e.to_string());
        }
    }

    /// Hand `event` to the timer thread, stamped with the current epoch.
    ///
    pub fn dispatch(&mut self, event: Event) -> Result<(), StateError> {
        let sender = self.timer_sender.as_ref().ok_or_else(|| {
            StateError::TimerDispatchFailed("timer thread not running".to_string())
        })?;
        let timer = Timer {
            event: event.clone(),
            epoch: self.epoch,
        };
        if let Err(err) = sender.send(timer) {
            error!("Received error from timer dispatch: {}", err);
            return Err(StateError::TimerDispatchFailed(err.to_string()));
        }
        self.pending = Some(event);
        Ok(())
    }

    /// Apply a finished timer. Timers from a view that is gone are dropped.
    ///
    pub fn resolve(&mut self, timer: Timer) {
        if timer.epoch != self.epoch {
            debug!(
                "Discarding stale timer '{:?}' (epoch {} != {})...",
                timer.event, timer.epoch, self.epoch
            );
            return;
        }
        self.pending = None;
        match timer.event {
            Event::SaveDraft => {
                self.set_notice(NoticeKind::Success, "Profile saved as draft".to_string());
            }
            Event::PublishProfile => {
                self.session.mark_profile_published();
                self.navigate(Route::FreelancerDashboard);
                self.set_notice(
                    NoticeKind::Success,
                    "Your profile has been published!".to_string(),
                );
            }
            Event::SignIn { audience, mode } => {
                self.session.set_is_authenticated(true);
                self.navigate(redirect_for(&audience));
                self.set_notice(NoticeKind::Success, mode.success_message().to_string());
            }
            Event::PostJob => {
                self.navigate(Route::ClientDashboard);
                self.set_notice(NoticeKind::Success, "Job posted successfully!".to_string());
            }
        }
    }

    /// Invalidate every timer dispatched so far.
    ///
    pub fn cancel_timers(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending = None;
    }

    /// Advance one UI tick, expiring the notice when its time is up.
    ///
    pub fn tick(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            if !notice.tick() {
                self.notice = None;
            }
        }
    }

    pub fn set_notice(&mut self, kind: NoticeKind, message: String) {
        match kind {
            NoticeKind::Error => warn!("{}", message),
            NoticeKind::Success | NoticeKind::Info => info!("{}", message),
        }
        self.notice = Some(Notice::new(kind, message, self.notice_ttl));
    }

    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push(entry);
        // Keep only the last entries to bound memory
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            self.log_entries.remove(0);
        }
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::auth::AuthMode;
    use crate::profile::City;
    use crate::session::UserType;
    use fake::faker::internet::en::{FreeEmail, Password};
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;
    use std::sync::mpsc::{channel, Receiver};

    fn with_timers() -> (State, Receiver<Timer>) {
        let (tx, rx) = channel();
        (State::new(tx, Theme::default(), 3), rx)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            state.input(FormInput::Char(c));
        }
    }

    #[test]
    fn landing_to_auth_sets_user_type() {
        let (mut state, _rx) = with_timers();
        state.input(FormInput::Activate);
        assert_eq!(*state.route(), Route::Onboarding);
        state.input(FormInput::Next);
        state.input(FormInput::Activate);
        assert_eq!(*state.route(), Route::Auth("client".to_string()));
        assert_eq!(state.session().user_type(), UserType::Client);
    }

    #[test]
    fn empty_auth_form_is_rejected() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::Auth("freelancer".to_string()));
        state.submit_auth();
        assert_eq!(state.notice().map(|n| n.kind), Some(NoticeKind::Error));
        assert!(!state.session().is_authenticated());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn sign_up_authenticates_and_redirects() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::Auth("client".to_string()));
        let email: String = FreeEmail().fake();
        let password: String = Password(8..16).fake();
        type_text(&mut state, &email);
        state.next_field();
        type_text(&mut state, &password);
        state.input(FormInput::Activate);
        assert!(state.is_busy());

        let timer = rx.try_recv().unwrap();
        assert_eq!(
            timer.event,
            Event::SignIn {
                audience: "client".to_string(),
                mode: AuthMode::SignUp
            }
        );
        state.resolve(timer);
        assert!(state.session().is_authenticated());
        assert_eq!(*state.route(), Route::ClientPostJob);
        assert_eq!(
            state.notice().map(|n| n.message.as_str()),
            Some("Account created successfully!")
        );
    }

    #[test]
    fn sign_in_reports_logged_in() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::Auth("freelancer".to_string()));
        let email: String = FreeEmail().fake();
        let password: String = Password(8..16).fake();
        type_text(&mut state, &email);
        state.next_field();
        type_text(&mut state, &password);
        state.next_field();
        state.next_field();
        state.input(FormInput::Next);
        state.submit_auth();

        let timer = rx.try_recv().unwrap();
        assert_eq!(
            timer.event,
            Event::SignIn {
                audience: "freelancer".to_string(),
                mode: AuthMode::SignIn
            }
        );
        state.resolve(timer);
        assert_eq!(*state.route(), Route::FreelancerPortfolio);
        assert_eq!(
            state.notice().map(|n| n.message.as_str()),
            Some("Logged in successfully!")
        );
    }

    #[test]
    fn publish_fires_once() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        for _ in 0..7 {
            state.wizard_next();
        }
        let timer = rx.try_recv().unwrap();
        assert_eq!(timer.event, Event::PublishProfile);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.session().wizard_step_index(), 6);

        state.resolve(timer);
        assert!(state.session().is_profile_published());
        assert_eq!(*state.route(), Route::FreelancerDashboard);
        assert_eq!(
            state.notice().map(|n| n.message.as_str()),
            Some("Your profile has been published!")
        );
    }

    #[test]
    fn stale_timer_is_discarded() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.save_draft();
        let timer = rx.try_recv().unwrap();
        state.navigate(Route::Home);
        assert!(!state.is_busy());
        state.resolve(timer);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn save_draft_is_ignored_while_busy() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.save_draft();
        state.save_draft();
        state.wizard_next();
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(state.session().wizard_step_index(), 1);
    }

    #[test]
    fn back_from_first_step_leaves_wizard() {
        let (mut state, _rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.wizard_back();
        assert_eq!(*state.route(), Route::Auth("freelancer".to_string()));
    }

    #[test]
    fn typing_in_wizard_merges_into_session() {
        let (mut state, _rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.wizard_next();
        state.wizard_next();
        let title: String = Word().fake();
        type_text(&mut state, &title);
        assert_eq!(state.session().freelancer_draft().title(), title);
    }

    #[test]
    fn location_pick_survives_navigation() {
        let (mut state, _rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.input(FormInput::Next);
        state.input(FormInput::Activate);
        assert_eq!(state.session().freelancer_draft().city, Some(City::Sfax));
        state.navigate(Route::Home);
        state.navigate(Route::FreelancerPortfolio);
        assert_eq!(state.session().freelancer_draft().city, Some(City::Sfax));
    }

    #[test]
    fn incomplete_job_is_not_posted() {
        let (mut state, rx) = with_timers();
        state.navigate(Route::ClientPostJob);
        let title: String = Sentence(2..4).fake();
        type_text(&mut state, &title);
        state.submit_job();
        assert_eq!(
            state.notice().map(|n| n.message.as_str()),
            Some("Please fill in all required fields")
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn go_back_page_follows_history() {
        let mut state = State::default();
        assert!(!state.go_back_page());
        state.navigate(Route::Onboarding);
        state.navigate(Route::NotFound("/nope".to_string()));
        assert!(state.go_back_page());
        assert_eq!(*state.route(), Route::Onboarding);
    }

    #[test]
    fn focus_wraps() {
        let mut state = State::default();
        state.navigate(Route::Onboarding);
        state.previous_field();
        assert_eq!(state.focus(), 1);
        state.next_field();
        assert_eq!(state.focus(), 0);
    }

    #[test]
    fn dispatch_without_timer_thread_fails() {
        let mut state = State::default();
        assert!(matches!(
            state.dispatch(Event::SaveDraft),
            Err(StateError::TimerDispatchFailed(_))
        ));
        assert!(!state.is_busy());
    }

    #[test]
    fn notice_expires_after_ticks() {
        let (mut state, _rx) = with_timers();
        state.set_notice(NoticeKind::Info, "hello".to_string());
        state.tick();
        state.tick();
        assert!(state.notice().is_some());
        state.tick();
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn start_over_resets_session() {
        let (mut state, _rx) = with_timers();
        state.navigate(Route::FreelancerPortfolio);
        state.wizard_next();
        state.start_over();
        assert_eq!(*state.route(), Route::Home);
        assert_eq!(state.session().wizard_step_index(), 1);
        assert!(!state.go_back_page());
    }

    #[test]
    fn log_entries_are_capped() {
        let mut state = State::default();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            state.add_log_entry(format!("entry {}", i));
        }
        assert_eq!(state.log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.log_entries()[0], "entry 5");
    }
}
