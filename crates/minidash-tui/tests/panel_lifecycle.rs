//! Lifecycle tests for the metrics panel.
//!
//! A gated stub source lets each test decide when the fetch resolves, so
//! the panel can be observed before, after, and instead of resolution.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use minidash_client::decode::decode_metrics;
use minidash_client::error::FetchError;
use minidash_client::source::MetricsSource;
use minidash_common::types::MetricsCollection;
use minidash_tui::app::App;
use minidash_tui::panel::{Panel, PanelState};
use minidash_tui::ui::{render, text_lines};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tokio::runtime::Handle;
use tokio::sync::Notify;

const HEADING: &str = "Mini Analytics Dashboard";

enum Reply {
    Body(&'static str),
    Status(u16),
}

struct StubSource {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicBool>,
    gate: Arc<Notify>,
}

struct Gate {
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicBool>,
    gate: Arc<Notify>,
}

impl Gate {
    fn release(&self) {
        self.gate.notify_one();
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn stub(reply: Reply) -> (StubSource, Gate) {
    let calls = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicBool::new(false));
    let gate = Arc::new(Notify::new());
    let source = StubSource {
        reply,
        calls: Arc::clone(&calls),
        completed: Arc::clone(&completed),
        gate: Arc::clone(&gate),
    };
    (
        source,
        Gate {
            calls,
            completed,
            gate,
        },
    )
}

#[async_trait]
impl MetricsSource for StubSource {
    fn endpoint(&self) -> &str {
        "stub://metrics"
    }

    async fn fetch(&self) -> Result<MetricsCollection, FetchError> {
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.completed.store(true, Ordering::SeqCst);
        match self.reply {
            Reply::Body(body) => decode_metrics(body.as_bytes()),
            Reply::Status(status) => Err(FetchError::Status {
                endpoint: "stub://metrics".into(),
                status,
            }),
        }
    }
}

async fn resolve(panel: &mut Panel) {
    tokio::time::timeout(Duration::from_secs(2), panel.wait())
        .await
        .expect("fetch did not resolve in time");
}

async fn until_started(gate: &Gate) {
    for _ in 0..100 {
        if gate.calls() > 0 {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("fetch never started");
}

#[tokio::test]
async fn only_heading_before_fetch_resolves() {
    let (source, _gate) = stub(Reply::Body("[]"));
    let mut panel = Panel::mount(&Handle::current(), source);

    assert!(!panel.poll());
    assert!(panel.is_loading());
    assert_eq!(panel.state(), &PanelState::Empty);
    assert_eq!(text_lines(panel.state()), [HEADING]);
}

#[tokio::test]
async fn single_record_renders_one_row() {
    let (source, gate) = stub(Reply::Body(
        r#"[{"date":"2024-01-01","status":"paid","payment_method":"credit_card","total_orders":5,"total_revenue":120.50}]"#,
    ));
    let mut panel = Panel::mount(&Handle::current(), source);
    gate.release();
    resolve(&mut panel).await;

    assert!(!panel.is_loading());
    assert_eq!(
        text_lines(panel.state()),
        [HEADING, "2024-01-01 | paid | credit_card | 5 | R$ 120.5"]
    );
}

#[tokio::test]
async fn empty_response_keeps_list_empty() {
    let (source, gate) = stub(Reply::Body("[]"));
    let mut panel = Panel::mount(&Handle::current(), source);
    gate.release();
    resolve(&mut panel).await;

    assert_eq!(panel.state(), &PanelState::Loaded(MetricsCollection::new()));
    assert!(panel.records().is_empty());
}

#[tokio::test]
async fn rows_follow_server_order() {
    let (source, gate) = stub(Reply::Body(
        r#"[
            {"date":"2024-01-03","status":"paid","payment_method":"pix","total_orders":2,"total_revenue":40},
            {"date":"2024-01-01","status":"refunded","payment_method":"boleto","total_orders":1,"total_revenue":19.9},
            {"date":"2024-01-03","status":"paid","payment_method":"pix","total_orders":2,"total_revenue":40},
            {"date":"2024-01-02","status":"pending","payment_method":"credit_card","total_orders":7,"total_revenue":350.75}
        ]"#,
    ));
    let mut panel = Panel::mount(&Handle::current(), source);
    gate.release();
    resolve(&mut panel).await;

    assert_eq!(
        text_lines(panel.state()),
        [
            HEADING,
            "2024-01-03 | paid | pix | 2 | R$ 40",
            "2024-01-01 | refunded | boleto | 1 | R$ 19.9",
            "2024-01-03 | paid | pix | 2 | R$ 40",
            "2024-01-02 | pending | credit_card | 7 | R$ 350.75",
        ]
    );
}

#[tokio::test]
async fn mounting_once_fetches_once() {
    let (source, gate) = stub(Reply::Body("[]"));
    let mut app = App::new(Panel::mount(&Handle::current(), source));
    let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();

    for _ in 0..25 {
        app.handle_event(&minidash_tui::event::TerminalEvent::Tick);
        let _ = terminal.draw(|frame| render(frame, &app)).unwrap();
        let _ = text_lines(app.panel().state());
        tokio::task::yield_now().await;
    }
    gate.release();
    for _ in 0..100 {
        if !app.panel().is_loading() {
            break;
        }
        app.handle_event(&minidash_tui::event::TerminalEvent::Tick);
        let _ = terminal.draw(|frame| render(frame, &app)).unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    for _ in 0..25 {
        app.handle_event(&minidash_tui::event::TerminalEvent::Tick);
        let _ = terminal.draw(|frame| render(frame, &app)).unwrap();
        tokio::task::yield_now().await;
    }

    assert!(matches!(app.panel().state(), PanelState::Loaded(_)));
    assert_eq!(gate.calls(), 1);
}

#[tokio::test]
async fn invalid_json_fails_without_rows() {
    let (source, gate) = stub(Reply::Body("<html>oops</html>"));
    let mut panel = Panel::mount(&Handle::current(), source);
    gate.release();
    resolve(&mut panel).await;

    assert!(matches!(panel.state(), PanelState::Failed(_)));
    assert!(panel.records().is_empty());
    assert_eq!(text_lines(panel.state()), [HEADING]);
}

#[tokio::test]
async fn server_error_is_reported_in_summary() {
    let (source, gate) = stub(Reply::Status(502));
    let mut panel = Panel::mount(&Handle::current(), source);
    gate.release();
    resolve(&mut panel).await;

    let summary = panel.state().summary();
    assert!(summary.starts_with("error:"), "summary: {summary}");
    assert!(summary.contains("502"), "summary: {summary}");
}

#[tokio::test]
async fn unmount_discards_late_result() {
    let (source, gate) = stub(Reply::Body("[]"));
    let mut panel = Panel::mount(&Handle::current(), source);
    until_started(&gate).await;

    panel.unmount();
    gate.release();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!gate.completed.load(Ordering::SeqCst));
    assert!(!panel.poll());
    assert_eq!(panel.state(), &PanelState::Empty);
}

#[tokio::test]
async fn dropping_panel_aborts_fetch() {
    let (source, gate) = stub(Reply::Body("[]"));
    let panel = Panel::mount(&Handle::current(), source);
    until_started(&gate).await;

    drop(panel);
    gate.release();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!gate.completed.load(Ordering::SeqCst));
    assert_eq!(gate.calls(), 1);
}
