//! The end-to-end session scenario: bootstrap, clicks, navigation, referral
//! copy and an optional error report, all through the real controller.

use crate::recorder::{EventLog, HeadlessPlatform, RecordingView, ViewEvent};
use dubnacoin_core::{
    Api, Bootstrapper, ClickOutcome, ClientConfig, Destination, LaunchContext, LaunchError,
    ReportStatus, Services, Transport,
};
use serde::Serialize;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ScenarioPlan {
    pub name: String,
    pub clicks: u32,
    pub report_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub page_state: String,
    pub balances: Vec<u64>,
    pub navigation: Vec<String>,
    pub referral_link: Option<String>,
    pub report: Option<String>,
    pub failures: Vec<String>,
    pub events: Vec<ViewEvent>,
    pub duration: Duration,
}

impl ScenarioResult {
    fn new(plan: &ScenarioPlan) -> Self {
        Self {
            scenario_name: plan.name.clone(),
            passed: false,
            page_state: String::new(),
            balances: Vec::new(),
            navigation: Vec::new(),
            referral_link: None,
            report: None,
            failures: Vec::new(),
            events: Vec::new(),
            duration: Duration::ZERO,
        }
    }
}

fn report_label(status: &ReportStatus) -> String {
    match status {
        ReportStatus::Sent => "sent".into(),
        ReportStatus::Rejected => "rejected".into(),
        ReportStatus::Failed(err) => format!("failed: {err}"),
    }
}

/// Drive one page load against `transport`.
///
/// Passes when the session became ready and every click produced a balance.
pub async fn run_scenario<T: Transport>(
    transport: T,
    config: ClientConfig,
    launch: Result<LaunchContext, LaunchError>,
    plan: &ScenarioPlan,
) -> ScenarioResult {
    let start = Instant::now();
    let mut result = ScenarioResult::new(plan);
    let log = EventLog::default();
    let services = Rc::new(Services::new(
        Api::new(transport, config),
        RecordingView::new(Rc::clone(&log)),
        HeadlessPlatform::new(Rc::clone(&log)),
    ));

    let outcome = Bootstrapper::new(Rc::clone(&services), launch).run().await;
    result.page_state = format!("{:?}", outcome.page_state());
    let Some(interactions) = outcome.interactions() else {
        result
            .failures
            .push(format!("bootstrap ended in {}", result.page_state));
        result.events = log.borrow().clone();
        result.duration = start.elapsed();
        return result;
    };

    for attempt in 1..=plan.clicks {
        match interactions.click().await {
            Ok(ClickOutcome::Balance(coins)) => result.balances.push(coins),
            Ok(ClickOutcome::Refused(reason)) => {
                result
                    .failures
                    .push(format!("click {attempt} refused: {reason}"));
            }
            Err(err) => result.failures.push(format!("click {attempt} failed: {err}")),
        }
    }

    for destination in [Destination::Shop, Destination::Friends] {
        result.navigation.push(interactions.url_for(destination));
        interactions.open(destination);
    }

    result.referral_link = interactions.referral_link();
    services
        .view
        .set_referral_input(result.referral_link.clone());
    if result.referral_link.is_some() {
        // Recorded as a `Copied` event or an alert.
        let _ = interactions.copy_referral_link().await;
    }

    if let Some(message) = &plan.report_message {
        interactions.open_report_dialog();
        let status = interactions.submit_report(message).await;
        result.report = Some(report_label(&status));
    }

    result.passed = result.failures.is_empty();
    result.events = log.borrow().clone();
    result.duration = start.elapsed();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::{ScriptedAccount, ScriptedBackend};
    use crate::signing::{SigningScheme, sign_init_data};
    use dubnacoin_core::LaunchUser;

    fn plan(clicks: u32, report: Option<&str>) -> ScenarioPlan {
        ScenarioPlan {
            name: "session".into(),
            clicks,
            report_message: report.map(ToString::to_string),
        }
    }

    fn launch(token: &str) -> LaunchContext {
        let user = LaunchUser {
            id: 42,
            username: Some("ann".into()),
            ..LaunchUser::default()
        };
        let init_data = sign_init_data(SigningScheme::Legacy, token, &user, 1).unwrap();
        LaunchContext::new(init_data, Some("7".into()))
    }

    fn config() -> ClientConfig {
        ClientConfig {
            bot_username: Some("dubnacoin_bot".into()),
            pulse_ms: 0,
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn scripted_session_passes_end_to_end() {
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, ScriptedAccount::default());
        let result = run_scenario(backend, config(), Ok(launch("t")), &plan(3, Some("froze"))).await;
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.page_state, "Ready");
        assert_eq!(result.balances, vec![1, 2, 3]);
        assert_eq!(result.navigation, vec!["/shop", "/friends"]);
        assert_eq!(
            result.referral_link.as_deref(),
            Some("https://t.me/dubnacoin_bot?startapp=42")
        );
        assert_eq!(result.report.as_deref(), Some("sent"));
        assert!(result.events.contains(&ViewEvent::Copied {
            text: "https://t.me/dubnacoin_bot?startapp=42".into()
        }));
    }

    #[tokio::test]
    async fn rejected_launch_data_fails_the_scenario() {
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, ScriptedAccount::default());
        let result = run_scenario(backend, config(), Ok(launch("wrong")), &plan(2, None)).await;
        assert!(!result.passed);
        assert!(result.page_state.contains("BootstrapFailed"));
        assert!(result.balances.is_empty());
        assert!(result.events.iter().all(|e| !matches!(e, ViewEvent::Balance { .. })));
    }

    #[tokio::test]
    async fn missing_bridge_is_unsupported() {
        let backend = ScriptedBackend::new("t", SigningScheme::Legacy, ScriptedAccount::default());
        let result = run_scenario(
            backend,
            config(),
            Err(LaunchError::BridgeUnavailable),
            &plan(1, None),
        )
        .await;
        assert_eq!(result.page_state, "Unsupported");
        assert!(!result.passed);
    }
}
