//! Integration tests: request layer → gateway → analysis.

use std::sync::Arc;

use irrisim::actuator::PumpState;
use irrisim::api::{ControlRequest, DeviceContext};
use irrisim::config::GatewayConfig;
use irrisim::gateway::EdgeGateway;
use irrisim::{AnalysisError, CommandError, Error};

fn control(command: Option<&str>) -> ControlRequest {
    serde_json::from_value(match command {
        Some(c) => serde_json::json!({ "command": c }),
        None => serde_json::json!({}),
    })
    .unwrap()
}

// ── Session flow: /data cycles feed /analysis ─────────────────

#[test]
fn session_summary_matches_collected_records() {
    let ctx = DeviceContext::with_seed(GatewayConfig::default(), 42);

    let mut records = Vec::new();
    for _ in 0..30 {
        records.push(ctx.handle_data());
    }

    let summary = ctx.handle_analysis().expect("history is non-empty");
    assert_eq!(summary.total_records, 30);

    let on_cycles = records
        .iter()
        .filter(|r| r.pump_state == PumpState::On)
        .count() as u64;
    assert_eq!(summary.total_pump_on_time_seconds, on_cycles * 2);

    assert!(summary.min_moisture <= summary.avg_moisture);
    assert!(summary.avg_moisture <= summary.max_moisture);
    assert!(summary.min_level <= summary.avg_level);
    assert!(summary.avg_level <= summary.max_level);
}

#[test]
fn analysis_before_first_cycle_is_an_error_not_a_crash() {
    let ctx = DeviceContext::with_seed(GatewayConfig::default(), 1);
    assert_eq!(
        ctx.handle_analysis().unwrap_err(),
        Error::Analysis(AnalysisError::EmptyHistory)
    );

    // One cycle later the summary exists.
    ctx.handle_data();
    assert!(ctx.handle_analysis().is_ok());
}

// ── Control endpoint asymmetry ───────────────────────────────

#[test]
fn missing_command_fails_unrecognized_command_succeeds() {
    let ctx = DeviceContext::with_seed(GatewayConfig::default(), 2);

    assert_eq!(
        ctx.handle_control(&control(None)).unwrap_err(),
        Error::Command(CommandError::MissingCommand)
    );

    let resp = ctx.handle_control(&control(Some("sideways"))).unwrap();
    assert_eq!(resp.status, "success");
    assert_eq!(resp.new_state, "sideways");
}

#[test]
fn cycle_log_replaces_override_log() {
    let ctx = DeviceContext::with_seed(GatewayConfig::default(), 3);
    ctx.handle_control(&control(Some("ON"))).unwrap();

    // The next automatic cycle re-evaluates and writes its own log.
    let record = ctx.handle_data();
    assert!(
        !record.log.contains("MANUAL OVERRIDE"),
        "a cycle must replace the override log with its own"
    );
}

// ── The original 20-cycle field scenario ─────────────────────

#[test]
fn twenty_cycle_scenario_with_mid_session_overrides() {
    let ctx = DeviceContext::with_seed(GatewayConfig::default(), 7);
    let config = GatewayConfig::default();

    for cycle in 0..20 {
        if cycle == 12 {
            ctx.handle_control(&control(Some("ON"))).unwrap();
        }
        if cycle == 16 {
            ctx.handle_control(&control(Some("OFF"))).unwrap();
        }

        let record = ctx.handle_data();

        assert!(
            (0.0..=100.0).contains(&record.moisture),
            "cycle {cycle}: moisture out of range: {}",
            record.moisture
        );
        assert!(record.level >= 0.0, "cycle {cycle}: negative level");

        if record.level > config.level_emergency_threshold {
            assert_eq!(record.pump_state, PumpState::Off);
            assert!(record.log.contains("EMERGENCY"));
        }
        assert!(record.category.is_some(), "default preset classifies");
    }

    let summary = ctx.handle_analysis().unwrap();
    assert_eq!(summary.total_records, 20);
}

// ── Hysteresis: no chatter in the dead band ───────────────────

#[test]
fn pump_holds_state_throughout_the_dead_band() {
    let config = GatewayConfig::default();
    let mut gw = EdgeGateway::with_seed(config.clone(), 99);

    let mut prev_state = gw.pump_state();
    for _ in 0..200 {
        let record = gw.run_logic_cycle();

        if record.log.contains("EMERGENCY") {
            assert_eq!(record.pump_state, PumpState::Off);
        } else if record.moisture <= config.moisture_on_threshold {
            assert_eq!(record.pump_state, PumpState::On);
        } else if record.moisture > config.moisture_off_threshold {
            assert_eq!(record.pump_state, PumpState::Off);
        } else {
            assert_eq!(
                record.pump_state, prev_state,
                "state must hold inside the dead band ({}%)",
                record.moisture
            );
        }
        prev_state = record.pump_state;
    }
}

// ── Plain-band preset runs the same code path ────────────────

#[test]
fn plain_band_preset_cycles_without_categories() {
    let ctx = DeviceContext::with_seed(GatewayConfig::plain_band(), 5);
    for _ in 0..10 {
        let record = ctx.handle_data();
        assert!(record.category.is_none());
        assert!((0.0..=100.0).contains(&record.moisture));
    }
    assert_eq!(ctx.handle_analysis().unwrap().total_records, 10);
}

// ── Concurrent requests serialize on the device lock ─────────

#[test]
fn concurrent_cycles_and_overrides_never_lose_records() {
    let ctx = Arc::new(DeviceContext::with_seed(GatewayConfig::default(), 11));

    let mut handles = Vec::new();
    for worker in 0..8 {
        let ctx = Arc::clone(&ctx);
        handles.push(std::thread::spawn(move || {
            for i in 0..25 {
                if worker == 0 && i % 5 == 0 {
                    let cmd = if i % 2 == 0 { "ON" } else { "off" };
                    ctx.handle_control(&control(Some(cmd))).unwrap();
                }
                let record = ctx.handle_data();
                assert!((0.0..=100.0).contains(&record.moisture));
                assert!(record.level >= 0.0);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let summary = ctx.handle_analysis().unwrap();
    assert_eq!(
        summary.total_records,
        8 * 25,
        "every cycle must append exactly one record"
    );
}
