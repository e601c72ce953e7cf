//! Logical commands ("controls") and the modes that group them.
//!
//! Every rebindable command in the application is one [`Control`] variant.
//! Each control belongs to exactly one [`Mode`]; the persisted binding
//! document has one section per mode, and the conflict handler loads one
//! mode's worth of bindings at a time.
//!
//! Control names are the stable persistence identifiers. They never change
//! once shipped, regardless of how the UI labels the command.

pub mod conflict;
pub mod settings;

pub use conflict::ConflictHandler;
pub use settings::{BindingRecord, BindingsDocument, SettingsError};

/// An interaction context with its own independent binding set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    FirstPerson,
    ThirdPerson,
    Edit,
    EditAvatar,
    Sitting,
    /// Mode-independent UI commands; stored keyed by command name rather
    /// than as a record list.
    General,
}

impl Mode {
    pub const ALL: &'static [Mode] = &[
        Mode::FirstPerson,
        Mode::ThirdPerson,
        Mode::Edit,
        Mode::EditAvatar,
        Mode::Sitting,
        Mode::General,
    ];

    /// Section name in the persisted binding document.
    pub fn name(self) -> &'static str {
        match self {
            Mode::FirstPerson => "first_person",
            Mode::ThirdPerson => "third_person",
            Mode::Edit => "edit",
            Mode::EditAvatar => "edit_avatar",
            Mode::Sitting => "sitting",
            Mode::General => "general",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        Mode::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// All controls belonging to this mode, in declaration order.
    pub fn controls(self) -> impl Iterator<Item = Control> {
        Control::ALL.iter().copied().filter(move |c| c.mode() == self)
    }
}

/// A logical, user-rebindable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    // ── Third-person movement ────────────────────────────────────────────
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    SlideLeft,
    SlideRight,
    Jump,
    Crouch,
    RunForward,
    RunBackward,
    RunLeft,
    RunRight,
    ToggleRun,
    ToggleFly,
    ToggleSit,
    StopMoving,
    LookUp,
    LookDown,

    // ── First-person (mouselook) ─────────────────────────────────────────
    MouselookMoveForward,
    MouselookMoveBackward,
    MouselookSlideLeft,
    MouselookSlideRight,
    MouselookJump,
    MouselookCrouch,

    // ── Edit (object manipulation camera) ────────────────────────────────
    EditCameraSpinLeft,
    EditCameraSpinRight,
    EditCameraSpinOver,
    EditCameraSpinUnder,
    EditCameraPanLeft,
    EditCameraPanRight,
    EditCameraPanUp,
    EditCameraPanDown,
    EditCameraZoomIn,
    EditCameraZoomOut,

    // ── Edit-avatar (appearance camera) ──────────────────────────────────
    AvatarSpinCcw,
    AvatarSpinCw,
    AvatarSpinOver,
    AvatarSpinUnder,
    AvatarZoomIn,
    AvatarZoomOut,

    // ── Sitting ──────────────────────────────────────────────────────────
    StandUp,
    SitCameraSpinLeft,
    SitCameraSpinRight,
    SitCameraZoomIn,
    SitCameraZoomOut,
    SitCameraReset,

    // ── General UI ───────────────────────────────────────────────────────
    OpenChat,
    OpenGestures,
    OpenInventory,
    OpenWorldMap,
    OpenMiniMap,
    OpenNearbyPeople,
    ToggleMouselook,
    ResetCamera,
    CameraZoomIn,
    CameraZoomOut,
    CameraZoomDefault,
    Snapshot,
    TeleportHome,
    ToggleUi,
    ToggleFullscreen,
    PushToTalk,
    ToggleVoice,
    DeleteSelection,
    DuplicateSelection,
    ToggleSearch,

    // Reserved placeholders for chords the UI itself owns. Not
    // user-assignable; they exist so a user assigning the same chord to
    // another command gets a conflict warning.
    ContextMenuClick,
    MultiSelectClick,
    ExtendSelectClick,
}

impl Control {
    pub const ALL: &'static [Control] = &[
        Control::MoveForward,
        Control::MoveBackward,
        Control::TurnLeft,
        Control::TurnRight,
        Control::SlideLeft,
        Control::SlideRight,
        Control::Jump,
        Control::Crouch,
        Control::RunForward,
        Control::RunBackward,
        Control::RunLeft,
        Control::RunRight,
        Control::ToggleRun,
        Control::ToggleFly,
        Control::ToggleSit,
        Control::StopMoving,
        Control::LookUp,
        Control::LookDown,
        Control::MouselookMoveForward,
        Control::MouselookMoveBackward,
        Control::MouselookSlideLeft,
        Control::MouselookSlideRight,
        Control::MouselookJump,
        Control::MouselookCrouch,
        Control::EditCameraSpinLeft,
        Control::EditCameraSpinRight,
        Control::EditCameraSpinOver,
        Control::EditCameraSpinUnder,
        Control::EditCameraPanLeft,
        Control::EditCameraPanRight,
        Control::EditCameraPanUp,
        Control::EditCameraPanDown,
        Control::EditCameraZoomIn,
        Control::EditCameraZoomOut,
        Control::AvatarSpinCcw,
        Control::AvatarSpinCw,
        Control::AvatarSpinOver,
        Control::AvatarSpinUnder,
        Control::AvatarZoomIn,
        Control::AvatarZoomOut,
        Control::StandUp,
        Control::SitCameraSpinLeft,
        Control::SitCameraSpinRight,
        Control::SitCameraZoomIn,
        Control::SitCameraZoomOut,
        Control::SitCameraReset,
        Control::OpenChat,
        Control::OpenGestures,
        Control::OpenInventory,
        Control::OpenWorldMap,
        Control::OpenMiniMap,
        Control::OpenNearbyPeople,
        Control::ToggleMouselook,
        Control::ResetCamera,
        Control::CameraZoomIn,
        Control::CameraZoomOut,
        Control::CameraZoomDefault,
        Control::Snapshot,
        Control::TeleportHome,
        Control::ToggleUi,
        Control::ToggleFullscreen,
        Control::PushToTalk,
        Control::ToggleVoice,
        Control::DeleteSelection,
        Control::DuplicateSelection,
        Control::ToggleSearch,
        Control::ContextMenuClick,
        Control::MultiSelectClick,
        Control::ExtendSelectClick,
    ];

    /// Stable persistence identifier.
    pub fn name(self) -> &'static str {
        match self {
            Control::MoveForward => "move_forward",
            Control::MoveBackward => "move_backward",
            Control::TurnLeft => "turn_left",
            Control::TurnRight => "turn_right",
            Control::SlideLeft => "slide_left",
            Control::SlideRight => "slide_right",
            Control::Jump => "jump",
            Control::Crouch => "crouch",
            Control::RunForward => "run_forward",
            Control::RunBackward => "run_backward",
            Control::RunLeft => "run_left",
            Control::RunRight => "run_right",
            Control::ToggleRun => "toggle_run",
            Control::ToggleFly => "toggle_fly",
            Control::ToggleSit => "toggle_sit",
            Control::StopMoving => "stop_moving",
            Control::LookUp => "look_up",
            Control::LookDown => "look_down",
            Control::MouselookMoveForward => "ml_move_forward",
            Control::MouselookMoveBackward => "ml_move_backward",
            Control::MouselookSlideLeft => "ml_slide_left",
            Control::MouselookSlideRight => "ml_slide_right",
            Control::MouselookJump => "ml_jump",
            Control::MouselookCrouch => "ml_crouch",
            Control::EditCameraSpinLeft => "edit_camera_spin_left",
            Control::EditCameraSpinRight => "edit_camera_spin_right",
            Control::EditCameraSpinOver => "edit_camera_spin_over",
            Control::EditCameraSpinUnder => "edit_camera_spin_under",
            Control::EditCameraPanLeft => "edit_camera_pan_left",
            Control::EditCameraPanRight => "edit_camera_pan_right",
            Control::EditCameraPanUp => "edit_camera_pan_up",
            Control::EditCameraPanDown => "edit_camera_pan_down",
            Control::EditCameraZoomIn => "edit_camera_zoom_in",
            Control::EditCameraZoomOut => "edit_camera_zoom_out",
            Control::AvatarSpinCcw => "avatar_spin_ccw",
            Control::AvatarSpinCw => "avatar_spin_cw",
            Control::AvatarSpinOver => "avatar_spin_over",
            Control::AvatarSpinUnder => "avatar_spin_under",
            Control::AvatarZoomIn => "avatar_zoom_in",
            Control::AvatarZoomOut => "avatar_zoom_out",
            Control::StandUp => "stand_up",
            Control::SitCameraSpinLeft => "sit_camera_spin_left",
            Control::SitCameraSpinRight => "sit_camera_spin_right",
            Control::SitCameraZoomIn => "sit_camera_zoom_in",
            Control::SitCameraZoomOut => "sit_camera_zoom_out",
            Control::SitCameraReset => "sit_camera_reset",
            Control::OpenChat => "open_chat",
            Control::OpenGestures => "open_gestures",
            Control::OpenInventory => "open_inventory",
            Control::OpenWorldMap => "open_world_map",
            Control::OpenMiniMap => "open_mini_map",
            Control::OpenNearbyPeople => "open_nearby_people",
            Control::ToggleMouselook => "toggle_mouselook",
            Control::ResetCamera => "reset_camera",
            Control::CameraZoomIn => "camera_zoom_in",
            Control::CameraZoomOut => "camera_zoom_out",
            Control::CameraZoomDefault => "camera_zoom_default",
            Control::Snapshot => "snapshot",
            Control::TeleportHome => "teleport_home",
            Control::ToggleUi => "toggle_ui",
            Control::ToggleFullscreen => "toggle_fullscreen",
            Control::PushToTalk => "push_to_talk",
            Control::ToggleVoice => "toggle_voice",
            Control::DeleteSelection => "delete_selection",
            Control::DuplicateSelection => "duplicate_selection",
            Control::ToggleSearch => "toggle_search",
            Control::ContextMenuClick => "context_menu_click",
            Control::MultiSelectClick => "multi_select_click",
            Control::ExtendSelectClick => "extend_select_click",
        }
    }

    pub fn from_name(name: &str) -> Option<Control> {
        Control::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// The one mode whose binding set owns this control.
    pub fn mode(self) -> Mode {
        use Control::*;
        match self {
            MoveForward | MoveBackward | TurnLeft | TurnRight | SlideLeft | SlideRight | Jump
            | Crouch | RunForward | RunBackward | RunLeft | RunRight | ToggleRun | ToggleFly
            | ToggleSit | StopMoving | LookUp | LookDown => Mode::ThirdPerson,
            MouselookMoveForward | MouselookMoveBackward | MouselookSlideLeft
            | MouselookSlideRight | MouselookJump | MouselookCrouch => Mode::FirstPerson,
            EditCameraSpinLeft | EditCameraSpinRight | EditCameraSpinOver | EditCameraSpinUnder
            | EditCameraPanLeft | EditCameraPanRight | EditCameraPanUp | EditCameraPanDown
            | EditCameraZoomIn | EditCameraZoomOut => Mode::Edit,
            AvatarSpinCcw | AvatarSpinCw | AvatarSpinOver | AvatarSpinUnder | AvatarZoomIn
            | AvatarZoomOut => Mode::EditAvatar,
            StandUp | SitCameraSpinLeft | SitCameraSpinRight | SitCameraZoomIn
            | SitCameraZoomOut | SitCameraReset => Mode::Sitting,
            _ => Mode::General,
        }
    }

    /// Display grouping for rebinding UI tables. Coarser than [`Mode`]
    /// for movement-heavy modes, which a UI splits by what the command
    /// steers.
    pub fn category(self) -> &'static str {
        use Control::*;
        match self {
            MoveForward | MoveBackward | TurnLeft | TurnRight | SlideLeft | SlideRight | Jump
            | Crouch | RunForward | RunBackward | RunLeft | RunRight | ToggleRun | ToggleFly
            | ToggleSit | StopMoving | MouselookMoveForward | MouselookMoveBackward
            | MouselookSlideLeft | MouselookSlideRight | MouselookJump | MouselookCrouch => {
                "Movement"
            }
            LookUp | LookDown | EditCameraSpinLeft | EditCameraSpinRight | EditCameraSpinOver
            | EditCameraSpinUnder | EditCameraPanLeft | EditCameraPanRight | EditCameraPanUp
            | EditCameraPanDown | EditCameraZoomIn | EditCameraZoomOut | AvatarSpinCcw
            | AvatarSpinCw | AvatarSpinOver | AvatarSpinUnder | AvatarZoomIn | AvatarZoomOut
            | SitCameraSpinLeft | SitCameraSpinRight | SitCameraZoomIn | SitCameraZoomOut
            | SitCameraReset | ResetCamera | CameraZoomIn | CameraZoomOut | CameraZoomDefault
            | ToggleMouselook => "Camera",
            StandUp | TeleportHome | DeleteSelection | DuplicateSelection => "Actions",
            OpenChat | OpenGestures | OpenInventory | OpenWorldMap | OpenMiniMap
            | OpenNearbyPeople | Snapshot | ToggleUi | ToggleFullscreen | ToggleSearch => {
                "Interface"
            }
            PushToTalk | ToggleVoice => "Voice",
            ContextMenuClick | MultiSelectClick | ExtendSelectClick => "Reserved",
        }
    }

    /// Reserved controls are permanent placeholders the UI itself owns;
    /// they are matched for conflict detection but never reassigned.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Control::ContextMenuClick | Control::MultiSelectClick | Control::ExtendSelectClick
        )
    }
}
