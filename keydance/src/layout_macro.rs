/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(HidKeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::HidKeyCode::$k))
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: expr, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::HidKeyCode::$k),
            $crate::action::Action::LayerOn($x),
        )
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::HidKeyCode::$k),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a tap dance key, `n` is the index of the tap dance
#[macro_export]
macro_rules! td {
    ($x: expr) => {
        $crate::action::KeyAction::TapDance($x)
    };
}

/// Create a user key, handled by the keymap instead of the firmware
#[macro_export]
macro_rules! user {
    ($x: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::User($x as u8))
    };
}
