pub mod common;

use keydance::config::TapDanceConfig;
use keydance::context::{Context, LayerGroups};
use keydance::dispatcher::{ContextFilter, DanceAction, DanceActionTable, Dispatcher};
use keydance::host::{KeyboardHost, LayerControl, ModifierControl};
use keydance::keycode::HidKeyCode;
use keydance::layout::{self, DEF_B, MAC_B, MAC_F, WIN_B, WIN_F};
use keydance::modifier::HidModifiers;
use keydance::tap_dance::{DanceOutcome, DanceState, TapDance};

use crate::common::{HostEvent, MockHost, at};

fn escape_dance() -> TapDance<LayerGroups, 8> {
    TapDance::new(&TapDanceConfig::default(), layout::layer_groups(), layout::escape_dance())
}

const CHORD_PRESS: [HostEvent; 3] = [
    HostEvent::Press(HidKeyCode::LCtrl),
    HostEvent::Press(HidKeyCode::LAlt),
    HostEvent::Press(HidKeyCode::LGui),
];

const CHORD_RELEASE: [HostEvent; 3] = [
    HostEvent::Release(HidKeyCode::LCtrl),
    HostEvent::Release(HidKeyCode::LAlt),
    HostEvent::Release(HidKeyCode::LGui),
];

fn finished(count: u8, pressed: bool) -> DanceState {
    DanceState {
        count,
        pressed,
        interrupted: false,
        finished: true,
    }
}

mod tap_dance_test {
    use super::*;

    #[test]
    fn test_single_tap() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.tick(at(199), &mut host);
        assert!(host.events.is_empty());

        td.tick(at(200), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
        assert!(td.dispatcher().session().is_empty());
        assert!(td.is_idle());
    }

    #[test]
    fn test_single_tap_without_context() {
        let mut host = MockHost::on_layer(DEF_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(30), &mut host);
        td.tick(at(230), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
    }

    #[test]
    fn test_single_hold_activates_layer() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.tick(at(199), &mut host);
        assert!(host.events.is_empty());

        td.tick(at(200), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(MAC_F)]);
        assert_eq!(host.layers.highest(), MAC_F);
        assert_eq!(td.dispatcher().session().outcome(), Some(DanceOutcome::SingleHold));

        // Held for a while, nothing changes
        td.tick(at(400), &mut host);
        td.on_release(at(500), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(MAC_F), HostEvent::LayerOff(MAC_F)]);
        assert_eq!(host.layers.highest(), MAC_B);
        assert!(td.dispatcher().session().is_empty());
    }

    #[test]
    fn test_single_hold_windows() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.tick(at(300), &mut host);
        td.on_release(at(350), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(WIN_F), HostEvent::LayerOff(WIN_F)]);
    }

    #[test]
    fn test_double_hold_chord_on_mac() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.tick(at(299), &mut host);
        assert!(host.events.is_empty());

        td.tick(at(300), &mut host);
        assert_eq!(host.events, CHORD_PRESS);

        td.on_release(at(400), &mut host);
        assert_eq!(host.events[..3], CHORD_PRESS);
        assert_eq!(host.events[3..], CHORD_RELEASE);
        assert!(td.is_idle());
    }

    #[test]
    fn test_double_hold_not_registered_on_windows() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.tick(at(300), &mut host);
        assert_eq!(td.dispatcher().session().outcome(), Some(DanceOutcome::DoubleHold));
        td.on_release(at(400), &mut host);

        assert!(host.events.is_empty());
        assert!(td.dispatcher().session().is_empty());
    }

    #[test]
    fn test_double_tap_unregistered() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.on_release(at(150), &mut host);
        td.tick(at(299), &mut host);
        assert_eq!(td.state().count, 2);
        td.tick(at(300), &mut host);

        assert!(host.events.is_empty());
        assert!(td.is_idle());
    }

    #[test]
    fn test_late_release_keeps_press_deadline() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(190), &mut host);
        td.tick(at(200), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
        assert!(td.is_idle());
    }

    #[test]
    fn test_release_past_deadline_without_tick_is_hold() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(260), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(MAC_F), HostEvent::LayerOff(MAC_F)]);
        assert!(td.is_idle());
    }

    #[test]
    fn test_double_hold_without_context() {
        let mut host = MockHost::on_layer(DEF_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.tick(at(300), &mut host);
        assert_eq!(td.dispatcher().session().outcome(), Some(DanceOutcome::DoubleHold));
        td.on_release(at(400), &mut host);

        assert!(host.events.is_empty());
        assert!(td.is_idle());
    }

    #[test]
    fn test_interrupted_while_held() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_interrupt(&mut host);
        assert_eq!(host.events, [HostEvent::Press(HidKeyCode::Escape)]);
        assert!(td.state().finished);

        // Interrupting a finished dance does nothing
        td.on_interrupt(&mut host);
        td.tick(at(500), &mut host);
        assert_eq!(host.events.len(), 1);

        td.on_release(at(600), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
        assert!(td.is_idle());
    }

    #[test]
    fn test_interrupted_after_release() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(40), &mut host);
        td.on_interrupt(&mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
        assert!(td.is_idle());
    }

    #[test]
    fn test_interrupt_without_dance() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();
        td.on_interrupt(&mut host);
        td.on_release(at(10), &mut host);
        td.tick(at(1000), &mut host);
        assert!(host.events.is_empty());
    }

    #[test]
    fn test_four_taps_unknown() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = escape_dance();

        for i in 0..4 {
            td.on_press(at(i * 100), &mut host);
            td.on_release(at(i * 100 + 50), &mut host);
        }
        td.tick(at(1000), &mut host);
        assert!(host.events.is_empty());
        assert!(td.is_idle());
    }

    #[test]
    fn test_dance_restarts_after_reset() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = escape_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(20), &mut host);
        td.tick(at(220), &mut host);
        td.on_press(at(300), &mut host);
        td.tick(at(500), &mut host);
        td.on_release(at(600), &mut host);

        assert_eq!(
            host.events,
            [
                HostEvent::Press(HidKeyCode::Escape),
                HostEvent::Release(HidKeyCode::Escape),
                HostEvent::LayerOn(WIN_F),
                HostEvent::LayerOff(WIN_F),
            ]
        );
    }
}

mod multi_tap_test {
    use super::*;

    fn function_key_dance() -> TapDance<LayerGroups, 8> {
        let table = DanceActionTable::new()
            .with(DanceOutcome::DoubleSingleTap, ContextFilter::Any, DanceAction::Key(HidKeyCode::F2))
            .with(DanceOutcome::TripleTap, ContextFilter::Any, DanceAction::Key(HidKeyCode::F3))
            .with(DanceOutcome::TripleHold, ContextFilter::Any, DanceAction::Layer(WIN_F));
        TapDance::new(&TapDanceConfig::default(), layout::layer_groups(), table)
    }

    #[test]
    fn test_double_single_tap() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut td = function_key_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.on_interrupt(&mut host);
        assert_eq!(host.events, [HostEvent::Press(HidKeyCode::F2)]);
        assert_eq!(td.dispatcher().session().outcome(), Some(DanceOutcome::DoubleSingleTap));

        td.on_release(at(150), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::F2), HostEvent::Release(HidKeyCode::F2)]
        );
        assert!(td.is_idle());
    }

    #[test]
    fn test_triple_tap() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut td = function_key_dance();

        for i in 0..3 {
            td.on_press(at(i * 100), &mut host);
            td.on_release(at(i * 100 + 50), &mut host);
        }
        td.tick(at(399), &mut host);
        assert!(host.events.is_empty());
        td.tick(at(400), &mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::F3), HostEvent::Release(HidKeyCode::F3)]
        );
        assert!(td.is_idle());
    }

    #[test]
    fn test_triple_hold() {
        let mut host = MockHost::on_layer(DEF_B);
        let mut td = function_key_dance();

        td.on_press(at(0), &mut host);
        td.on_release(at(50), &mut host);
        td.on_press(at(100), &mut host);
        td.on_release(at(150), &mut host);
        td.on_press(at(200), &mut host);
        td.tick(at(400), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(WIN_F)]);

        td.on_release(at(500), &mut host);
        assert_eq!(host.events, [HostEvent::LayerOn(WIN_F), HostEvent::LayerOff(WIN_F)]);
        assert!(td.is_idle());
    }
}

mod dispatcher_test {
    use super::*;

    fn dispatcher() -> Dispatcher<LayerGroups, 8> {
        Dispatcher::new(layout::layer_groups(), layout::escape_dance())
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut host = MockHost::on_layer(WIN_B);
        let mut dispatcher = dispatcher();

        dispatcher.on_finished(&finished(1, false), &mut host);
        dispatcher.on_reset(&mut host);
        dispatcher.on_reset(&mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::Escape), HostEvent::Release(HidKeyCode::Escape)]
        );
    }

    #[test]
    fn test_reset_without_finish() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut dispatcher = dispatcher();
        dispatcher.on_reset(&mut host);
        assert!(host.events.is_empty());
        assert!(dispatcher.session().is_empty());
    }

    #[test]
    fn test_outstanding_outcome_discharged() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut dispatcher = dispatcher();

        dispatcher.on_finished(&finished(1, true), &mut host);
        dispatcher.on_finished(&finished(1, false), &mut host);
        assert_eq!(
            host.events,
            [
                HostEvent::LayerOn(MAC_F),
                HostEvent::LayerOff(MAC_F),
                HostEvent::Press(HidKeyCode::Escape),
            ]
        );
        assert_eq!(dispatcher.session().outcome(), Some(DanceOutcome::SingleTap));
    }

    #[test]
    fn test_reset_undoes_applied_action_after_context_change() {
        let mut host = MockHost::on_layer(MAC_B);
        let mut dispatcher = dispatcher();

        dispatcher.on_finished(&finished(2, true), &mut host);
        host.set_single_default_layer(WIN_B);
        dispatcher.on_reset(&mut host);

        let mut expected = CHORD_PRESS.to_vec();
        expected.push(HostEvent::DefaultLayer(WIN_B));
        expected.extend_from_slice(&CHORD_RELEASE);
        assert_eq!(host.events, expected);
    }

    #[test]
    fn test_closure_resolver() {
        let mut host = MockHost::new();
        let table: DanceActionTable<2> = DanceActionTable::new().with(
            DanceOutcome::TripleHold,
            ContextFilter::Only(Context::WindowsLike),
            DanceAction::Key(HidKeyCode::F12),
        );
        let mut dispatcher = Dispatcher::new(|_: u8| Some(Context::WindowsLike), table);

        dispatcher.on_finished(&finished(3, true), &mut host);
        dispatcher.on_reset(&mut host);
        assert_eq!(
            host.events,
            [HostEvent::Press(HidKeyCode::F12), HostEvent::Release(HidKeyCode::F12)]
        );
    }

    #[test]
    fn test_custom_action() {
        fn apply(host: &mut dyn KeyboardHost) {
            host.set_mods(HidModifiers::new().with_left_shift(true));
            host.layer_on(3);
        }
        fn undo(host: &mut dyn KeyboardHost) {
            host.clear_mods();
            host.layer_off(3);
        }

        let mut host = MockHost::new();
        let table: DanceActionTable<2> = DanceActionTable::new().with(
            DanceOutcome::DoubleSingleTap,
            ContextFilter::Any,
            DanceAction::Custom { apply, undo },
        );
        let mut dispatcher = Dispatcher::new(|_: u8| -> Option<Context> { None }, table);

        let state = DanceState {
            count: 2,
            pressed: true,
            interrupted: true,
            finished: true,
        };
        dispatcher.on_finished(&state, &mut host);
        assert!(host.mods.left_shift());
        assert!(host.layers.is_active(3));

        dispatcher.on_reset(&mut host);
        assert!(host.mods.is_empty());
        assert!(!host.layers.is_active(3));
        assert_eq!(host.events, [HostEvent::LayerOn(3), HostEvent::LayerOff(3)]);
    }
}
