use async_trait::async_trait;
use dubnacoin_core::{
    Alert, Api, ApiError, BootstrapOutcome, Bootstrapper, ClickOutcome, ClientConfig,
    LaunchContext, LaunchError, Notice, PageState, Platform, ProfileSnapshot, ReportStatus,
    Services, Transport, View, Welcome,
};
use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Page(PageState),
    Welcome(Welcome),
    Profile(ProfileSnapshot),
    Balance(u64),
    Pulse(bool),
    Alert(Alert),
    Notice(Notice),
    OpenReport,
    CloseReport,
    ResetReport,
    ActivateNotices,
    Sleep(u32),
    Copy(String),
    Navigate(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Default)]
struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<String, ApiError>>>,
    requests: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    fn reply(&self, body: Value) {
        self.replies.borrow_mut().push_back(Ok(body.to_string()));
    }

    fn fail(&self, err: ApiError) {
        self.replies.borrow_mut().push_back(Err(err));
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, ApiError> {
        let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
        self.requests.borrow_mut().push((url.to_string(), parsed));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".into())))
    }
}

struct RecordingView {
    log: Log,
    referral: Option<String>,
}

impl RecordingView {
    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl View for RecordingView {
    fn set_page_state(&self, state: PageState) {
        self.push(Event::Page(state));
    }
    fn show_welcome(&self, welcome: Welcome) {
        self.push(Event::Welcome(welcome));
    }
    fn show_profile(&self, profile: &ProfileSnapshot) {
        self.push(Event::Profile(profile.clone()));
    }
    fn set_balance(&self, coins: u64) {
        self.push(Event::Balance(coins));
    }
    fn set_pulse(&self, active: bool) {
        self.push(Event::Pulse(active));
    }
    fn show_alert(&self, alert: Alert) {
        self.push(Event::Alert(alert));
    }
    fn show_notice(&self, notice: Notice) {
        self.push(Event::Notice(notice));
    }
    fn open_report_dialog(&self) {
        self.push(Event::OpenReport);
    }
    fn close_report_dialog(&self) {
        self.push(Event::CloseReport);
    }
    fn reset_report_form(&self) {
        self.push(Event::ResetReport);
    }
    fn activate_notifications(&self) {
        self.push(Event::ActivateNotices);
    }
    fn select_referral_link(&self) -> Option<String> {
        self.referral.clone()
    }
}

struct FakePlatform {
    log: Log,
    copy_error: Option<String>,
}

#[async_trait(?Send)]
impl Platform for FakePlatform {
    async fn sleep_ms(&self, duration_ms: u32) {
        self.log.borrow_mut().push(Event::Sleep(duration_ms));
    }

    async fn copy_text(&self, text: &str) -> Result<(), String> {
        self.log.borrow_mut().push(Event::Copy(text.to_string()));
        self.copy_error.clone().map_or(Ok(()), Err)
    }

    fn navigate(&self, url: &str) {
        self.log.borrow_mut().push(Event::Navigate(url.to_string()));
    }
}

type TestServices = Services<ScriptedTransport, RecordingView, FakePlatform>;

struct Harness {
    services: Rc<TestServices>,
    log: Log,
}

impl Harness {
    fn new() -> Self {
        Self::with(ClientConfig::default(), Some("https://t.me/bot?startapp=1".into()), None)
    }

    fn with(config: ClientConfig, referral: Option<String>, copy_error: Option<String>) -> Self {
        let log: Log = Rc::default();
        let services = Services::new(
            Api::new(ScriptedTransport::default(), config),
            RecordingView {
                log: Rc::clone(&log),
                referral,
            },
            FakePlatform {
                log: Rc::clone(&log),
                copy_error,
            },
        );
        Self {
            services: Rc::new(services),
            log,
        }
    }

    fn transport(&self) -> &ScriptedTransport {
        self.services.api.transport()
    }

    fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn bootstrap(
        &self,
        launch: Result<LaunchContext, LaunchError>,
    ) -> BootstrapOutcome<ScriptedTransport, RecordingView, FakePlatform> {
        block_on(Bootstrapper::new(Rc::clone(&self.services), launch).run())
    }

    fn ready(&self) -> dubnacoin_core::Interactions<ScriptedTransport, RecordingView, FakePlatform> {
        self.transport().reply(json!({
            "success": true,
            "token": "tok en",
            "username": "Ann",
            "level": 3,
            "coins": 42,
            "current_skin": "gold.png"
        }));
        let interactions = self
            .bootstrap(Ok(LaunchContext::new("auth_date=1&hash=x", None)))
            .interactions()
            .expect("bootstrap should succeed");
        self.clear();
        interactions
    }
}

#[test]
fn missing_bridge_issues_no_request_and_explains() {
    let harness = Harness::new();
    let outcome = harness.bootstrap(Err(LaunchError::BridgeUnavailable));

    assert_eq!(outcome.page_state(), PageState::Unsupported);
    assert!(outcome.interactions().is_none());
    assert!(harness.transport().requests.borrow().is_empty());
    let events = harness.events();
    assert!(events.contains(&Event::Welcome(Welcome::OpenInTelegram)));
    assert_eq!(events.last(), Some(&Event::Page(PageState::Unsupported)));
}

#[test]
fn accepted_bootstrap_fills_profile_and_unlocks_handlers() {
    let harness = Harness::new();
    harness.transport().reply(json!({
        "success": true,
        "token": "t-1",
        "username": "Ann",
        "level": 3,
        "coins": 42,
        "current_skin": "gold.png"
    }));
    let launch = LaunchContext::new("auth_date=1&hash=x", Some("99".into()));
    let outcome = harness.bootstrap(Ok(launch));

    assert_eq!(outcome.page_state(), PageState::Ready);
    let interactions = outcome.interactions().expect("ready");
    assert_eq!(interactions.session().token(), Some("t-1"));

    let requests = harness.transport().requests.borrow().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "/process_init_data");
    assert_eq!(
        requests[0].1,
        json!({ "initData": "auth_date=1&hash=x", "referrer_id": "99" })
    );

    let events = harness.events();
    let expected_profile = ProfileSnapshot::new("Ann", 3, 42, "gold.png");
    assert!(events.contains(&Event::Profile(expected_profile)));
    assert!(events.contains(&Event::Welcome(Welcome::Greeting("Ann".into()))));
    assert!(events.contains(&Event::Page(PageState::Ready)));
    assert_eq!(
        events.iter().filter(|e| **e == Event::ActivateNotices).count(),
        1,
        "notifications activate exactly once"
    );
    assert_eq!(
        harness.services.api.config().skin_url("gold.png"),
        "/static/images/gold.png"
    );
}

#[test]
fn rejected_bootstrap_shows_reason_and_stays_inert() {
    let harness = Harness::new();
    harness
        .transport()
        .reply(json!({ "success": false, "error": "expired" }));
    let outcome = harness.bootstrap(Ok(LaunchContext::new("auth_date=1", None)));

    assert_eq!(
        outcome.page_state(),
        PageState::BootstrapFailed("expired".into())
    );
    assert!(outcome.interactions().is_none());
    let events = harness.events();
    assert!(events.contains(&Event::Welcome(Welcome::Rejected("expired".into()))));
    assert!(!events.contains(&Event::ActivateNotices));
    assert!(!events.iter().any(|e| matches!(e, Event::Profile(_))));
}

#[test]
fn nameless_user_gets_a_greeting_without_a_name() {
    let harness = Harness::new();
    harness
        .transport()
        .reply(json!({ "success": true, "username": "" }));
    let outcome = harness.bootstrap(Ok(LaunchContext::new("auth_date=1", None)));

    assert_eq!(outcome.page_state(), PageState::Ready);
    let events = harness.events();
    assert!(events.contains(&Event::Welcome(Welcome::Anonymous)));
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, Event::Welcome(Welcome::Greeting(_))))
    );
}

#[test]
fn transport_or_decode_failure_is_a_network_error() {
    for failure in [
        Err(ApiError::Transport("offline".into())),
        Ok("<html>502</html>".to_string()),
    ] {
        let harness = Harness::new();
        match failure {
            Ok(body) => harness.transport().replies.borrow_mut().push_back(Ok(body)),
            Err(err) => harness.transport().fail(err),
        }
        let outcome = harness.bootstrap(Ok(LaunchContext::new("auth_date=1", None)));
        assert_eq!(outcome.page_state(), PageState::NetworkError);
        assert!(harness.events().contains(&Event::Welcome(Welcome::NetworkError)));
    }
}

#[test]
fn click_updates_balance_then_pulses_for_300ms() {
    let harness = Harness::new();
    let interactions = harness.ready();
    harness.transport().reply(json!({ "coins": 50 }));

    let outcome = block_on(interactions.click());
    assert_eq!(outcome, Ok(ClickOutcome::Balance(50)));
    assert_eq!(
        harness.events(),
        vec![
            Event::Balance(50),
            Event::Pulse(true),
            Event::Sleep(300),
            Event::Pulse(false),
        ]
    );
    let requests = harness.transport().requests.borrow().clone();
    assert_eq!(requests.last().map(|r| r.0.as_str()), Some("/click"));
    assert_eq!(requests.last().map(|r| r.1.clone()), Some(json!({ "token": "tok en" })));
}

#[test]
fn click_error_opens_dialog_and_keeps_balance() {
    let harness = Harness::new();
    let interactions = harness.ready();
    harness.transport().reply(json!({ "error": "rate limited" }));

    let outcome = block_on(interactions.click());
    assert_eq!(outcome, Ok(ClickOutcome::Refused("rate limited".into())));
    assert_eq!(
        harness.events(),
        vec![Event::Alert(Alert::ClickRefused("rate limited".into()))]
    );
}

#[test]
fn click_network_failure_uses_generic_dialog() {
    let harness = Harness::new();
    let interactions = harness.ready();
    harness.transport().fail(ApiError::Transport("offline".into()));
    assert!(block_on(interactions.click()).is_err());

    harness.transport().reply(json!({}));
    assert!(block_on(interactions.click()).is_err());

    assert_eq!(
        harness.events(),
        vec![Event::Alert(Alert::ClickFailed), Event::Alert(Alert::ClickFailed)]
    );
}

#[test]
fn successful_report_closes_and_clears_the_dialog() {
    let harness = Harness::new();
    let interactions = harness.ready();
    interactions.open_report_dialog();
    harness.transport().reply(json!({ "success": true }));

    let status = block_on(interactions.submit_report("coin is stuck"));
    assert_eq!(status, ReportStatus::Sent);
    assert_eq!(
        harness.events(),
        vec![
            Event::OpenReport,
            Event::CloseReport,
            Event::ResetReport,
            Event::Notice(Notice::ReportSent),
        ]
    );
    let requests = harness.transport().requests.borrow().clone();
    assert_eq!(
        requests.last().map(|r| r.1.clone()),
        Some(json!({ "error_message": "coin is stuck", "token": "tok en" }))
    );
}

#[test]
fn failed_report_leaves_dialog_open() {
    let harness = Harness::new();
    let interactions = harness.ready();
    harness.transport().reply(json!({ "success": false }));
    assert_eq!(
        block_on(interactions.submit_report("coin is stuck")),
        ReportStatus::Rejected
    );

    harness.transport().fail(ApiError::Transport("offline".into()));
    assert!(matches!(
        block_on(interactions.submit_report("coin is stuck")),
        ReportStatus::Failed(_)
    ));

    let events = harness.events();
    assert_eq!(
        events,
        vec![
            Event::Notice(Notice::ReportRejected),
            Event::Notice(Notice::ReportFailed),
        ]
    );
    assert!(!events.contains(&Event::CloseReport));
    assert!(!events.contains(&Event::ResetReport));
}

#[test]
fn navigation_carries_the_encoded_token() {
    let harness = Harness::new();
    let interactions = harness.ready();
    interactions.open_shop();
    interactions.open_friends();
    assert_eq!(
        harness.events(),
        vec![
            Event::Navigate("/shop?token=tok%20en".into()),
            Event::Navigate("/friends?token=tok%20en".into()),
        ]
    );
}

#[test]
fn referral_copy_reports_success_and_failure() {
    let harness = Harness::new();
    let interactions = harness.ready();
    assert_eq!(block_on(interactions.copy_referral_link()), Ok(()));
    assert_eq!(
        harness.events(),
        vec![
            Event::Copy("https://t.me/bot?startapp=1".into()),
            Event::Notice(Notice::LinkCopied),
        ]
    );

    let denied = Harness::with(
        ClientConfig::default(),
        Some("https://t.me/bot?startapp=1".into()),
        Some("NotAllowedError".into()),
    );
    let interactions = denied.ready();
    assert_eq!(
        block_on(interactions.copy_referral_link()),
        Err("NotAllowedError".to_string())
    );
    assert!(
        denied
            .events()
            .contains(&Event::Alert(Alert::CopyFailed("NotAllowedError".into())))
    );

    let missing = Harness::with(ClientConfig::default(), None, None);
    let interactions = missing.ready();
    assert!(block_on(interactions.copy_referral_link()).is_err());
    assert!(!missing.events().iter().any(|e| matches!(e, Event::Copy(_))));
}

#[test]
fn referral_link_needs_bot_and_user() {
    let config = ClientConfig {
        bot_username: Some("DubnaCoinBot".into()),
        ..ClientConfig::default()
    };
    let harness = Harness::with(config, None, None);
    harness.transport().reply(json!({ "success": true }));
    let launch = LaunchContext::new(
        "user=%7B%22id%22%3A5%2C%22first_name%22%3A%22Ann%22%7D&hash=x",
        None,
    );
    let interactions = harness
        .bootstrap(Ok(launch))
        .interactions()
        .expect("ready");
    assert_eq!(
        interactions.referral_link().as_deref(),
        Some("https://t.me/DubnaCoinBot?startapp=5")
    );
    assert!(
        harness
            .events()
            .contains(&Event::Welcome(Welcome::Greeting("Ann".into())))
    );
}
