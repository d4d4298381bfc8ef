use crate::AppCommand;

use tokio::sync::mpsc;
use uuid::Uuid;
use whilom_core::SleepState;

/// WHAT: State remains Enabled when command channel is closed
/// WHY: A click that cannot be delivered must not desync the state
#[tokio::test]
async fn given_closed_channel_when_dispatching_toggle_then_state_unchanged() {
    // Given: A closed command channel and the launch state
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);
    let state = SleepState::Enabled;

    // When: Attempting to send ToggleSleep
    let session_id = Uuid::new_v4();
    let result = command_tx
        .send(AppCommand::ToggleSleep { session_id })
        .await;

    // Then: Send fails and state remains Enabled
    assert!(result.is_err());
    assert_eq!(state, SleepState::Enabled);
}

/// WHAT: A delivered toggle command flips the state exactly once
/// WHY: One left-click must produce exactly one state change
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_open_channel_when_toggle_delivered_then_state_flips_once() {
    // Given: An open command channel and the launch state
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let mut state = SleepState::Enabled;

    // When: Sending ToggleSleep succeeds
    let session_id = Uuid::new_v4();
    command_tx
        .send(AppCommand::ToggleSleep { session_id })
        .await
        .unwrap();

    // Then: Command is received and the state flips to Disabled
    let cmd = command_rx.recv().await.unwrap();
    assert!(matches!(cmd, AppCommand::ToggleSleep { .. }));

    state = state.toggled();
    assert_eq!(state, SleepState::Disabled);
}

/// WHAT: Two delivered toggles return the state to Enabled
/// WHY: The toggle must round-trip, not latch
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_two_toggles_when_both_delivered_then_state_round_trips() {
    // Given: An open command channel and the launch state
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let mut state = SleepState::Enabled;

    // When: Two toggles are delivered in sequence
    for _ in 0..2 {
        let session_id = Uuid::new_v4();
        command_tx
            .send(AppCommand::ToggleSleep { session_id })
            .await
            .unwrap();

        let cmd = command_rx.recv().await.unwrap();
        assert!(matches!(cmd, AppCommand::ToggleSleep { .. }));
        state = state.toggled();
    }

    // Then: The state is back where it started
    assert_eq!(state, SleepState::Enabled);
}

/// WHAT: Shutdown command is delivered alongside pending toggles
/// WHY: Quit from the menu must drain through the same channel
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_toggle_then_shutdown_when_received_then_order_preserved() {
    // Given: An open command channel
    let (command_tx, mut command_rx) = mpsc::channel(32);

    // When: A toggle is queued ahead of a shutdown
    let session_id = Uuid::new_v4();
    command_tx
        .send(AppCommand::ToggleSleep { session_id })
        .await
        .unwrap();
    command_tx.send(AppCommand::Shutdown).await.unwrap();

    // Then: Commands arrive in post order
    assert!(matches!(
        command_rx.recv().await.unwrap(),
        AppCommand::ToggleSleep { .. }
    ));
    assert!(matches!(
        command_rx.recv().await.unwrap(),
        AppCommand::Shutdown
    ));
}
