use portal::signin::{SIGN_IN_STEPS, STEP_DELAY_MS};
use portal::{SignInFlow, SignInProgress};
use pretty_assertions::assert_eq;

#[test]
fn a_fresh_flow_reports_zero_percent() {
    let flow = SignInFlow::new();
    assert_eq!(flow.percent(), 0);
    assert!(!flow.is_complete());
}

#[test]
fn the_full_sequence_walks_every_label_once() {
    let mut flow = SignInFlow::new();
    let mut labels = Vec::new();
    loop {
        match flow.advance() {
            SignInProgress::InProgress { label, .. } => labels.push(label),
            SignInProgress::Complete => break,
        }
    }
    // The final advance reports Complete instead of the last label.
    assert_eq!(labels, SIGN_IN_STEPS[..SIGN_IN_STEPS.len() - 1].to_vec());
    assert!(flow.is_complete());
    assert_eq!(flow.percent(), 100);
}

#[test]
fn abandoning_a_flow_is_just_dropping_it() {
    let mut flow = SignInFlow::new();
    flow.advance();
    flow.advance();
    drop(flow);
    // A new flow starts clean regardless of what happened before.
    assert_eq!(SignInFlow::new().percent(), 0);
}

#[test]
fn step_constants_are_sane() {
    assert_eq!(SIGN_IN_STEPS.len(), 4);
    assert!(STEP_DELAY_MS > 0);
}
