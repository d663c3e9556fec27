//! Application state
//!
//! Split into core (persisted settings) and ui (everything the view reads).
//! Per-page state lives inside `PageState`; navigation replaces the whole
//! variant, so scenes, reveals and form drafts of the previous page are
//! dropped in one move.

use std::fmt;
use std::time::Instant;

use crate::content::CategoryFilter;
use crate::features::Settings;
use crate::routing::Route;
use crate::ui::animation::{HoverAnimations, RevealAnimation, RippleField};
use crate::ui::scene::{AmbientScene, SceneKind};
use crate::ui::widgets::toast::Toast;

pub struct App {
    pub core: CoreState,
    pub ui: UiState,
}

impl Default for App {
    fn default() -> Self {
        let settings = Settings::load();
        let mut app = Self {
            core: CoreState { settings },
            ui: UiState::default(),
        };
        // A reduced-motion start mounts the first page already revealed
        if app.core.settings.display.reduced_motion {
            app.ui.page = app.fresh_page(Route::Home);
        }
        app
    }
}

pub struct CoreState {
    pub settings: Settings,
}

pub struct UiState {
    pub route: Route,
    pub menu: MenuState,
    pub window_width: f32,
    pub toast: Option<Toast>,
    /// Bumped per toast; a hide timer only fires for its own epoch
    pub toast_epoch: u64,
    pub ripples: RippleField<RippleSurface>,
    pub page: PageState,
    pub last_tick: Option<Instant>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            menu: MenuState::Closed,
            window_width: 1280.0,
            toast: None,
            toast_epoch: 0,
            ripples: RippleField::new(),
            page: PageState::for_route(Route::Home, false),
            last_tick: None,
        }
    }
}

/// Compact-mode menu overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Every control that can host a press ripple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RippleSurface {
    HeroContact,
    HeroProjects,
    AboutResume,
    ProjectsCta,
    ProjectsReset,
    ContactSubmit,
    NotFoundHome,
}

/// State owned by the page currently on screen
pub enum PageState {
    Home {
        scene: AmbientScene,
        reveal: RevealAnimation,
    },
    About {
        scene: AmbientScene,
        reveal: RevealAnimation,
    },
    Stack {
        scene: AmbientScene,
        reveal: RevealAnimation,
    },
    Projects {
        scene: AmbientScene,
        reveal: RevealAnimation,
        projects: ProjectsState,
    },
    Contact {
        scene: AmbientScene,
        reveal: RevealAnimation,
        contact: ContactState,
    },
    NotFound {
        reveal: RevealAnimation,
    },
}

impl PageState {
    /// Fresh state for a route: new scene, reveal restarted from zero.
    ///
    /// With reduced motion there is no frame clock to drive the reveal, so
    /// the page mounts already settled instead of frozen mid-fade.
    pub fn for_route(route: Route, reduced_motion: bool) -> Self {
        let reveal = if reduced_motion {
            RevealAnimation::settled()
        } else {
            RevealAnimation::begin()
        };
        let scene = |kind| AmbientScene::new(kind);

        match route {
            Route::Home => PageState::Home {
                scene: scene(SceneKind::Particles),
                reveal,
            },
            Route::About => PageState::About {
                scene: scene(SceneKind::Torus),
                reveal,
            },
            Route::Stack => PageState::Stack {
                scene: scene(SceneKind::Grid),
                reveal,
            },
            Route::Projects => PageState::Projects {
                scene: scene(SceneKind::CubeCluster),
                reveal,
                projects: ProjectsState::default(),
            },
            Route::Contact => PageState::Contact {
                scene: scene(SceneKind::Spheres),
                reveal,
                contact: ContactState::default(),
            },
            Route::NotFound => PageState::NotFound { reveal },
        }
    }

    pub fn scene(&self) -> Option<&AmbientScene> {
        match self {
            PageState::Home { scene, .. }
            | PageState::About { scene, .. }
            | PageState::Stack { scene, .. }
            | PageState::Projects { scene, .. }
            | PageState::Contact { scene, .. } => Some(scene),
            PageState::NotFound { .. } => None,
        }
    }

    pub fn reveal(&self) -> &RevealAnimation {
        match self {
            PageState::Home { reveal, .. }
            | PageState::About { reveal, .. }
            | PageState::Stack { reveal, .. }
            | PageState::Projects { reveal, .. }
            | PageState::Contact { reveal, .. }
            | PageState::NotFound { reveal } => reveal,
        }
    }
}

/// Projects page: filter selection plus per-card hover reveals
#[derive(Default)]
pub struct ProjectsState {
    pub filter: CategoryFilter,
    pub card_hover: HoverAnimations<u32>,
}

/// Contact page: form draft and the simulated in-flight window
#[derive(Default)]
pub struct ContactState {
    pub fields: ContactFields,
    pub sending: bool,
    /// Bumped per accepted submit; a stale delivery is dropped
    pub submit_epoch: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// All fields are required; the first missing one names the failure
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.name.trim().is_empty() {
            return Err(SubmissionError::ValidationFailure("Please enter your name"));
        }
        if self.email.trim().is_empty() {
            return Err(SubmissionError::ValidationFailure(
                "Please enter your email address",
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(SubmissionError::ValidationFailure("Please enter a subject"));
        }
        if self.message.trim().is_empty() {
            return Err(SubmissionError::ValidationFailure("Please enter a message"));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = ContactFields::default();
    }
}

/// Why a contact submission did not go through.
///
/// Only validation can fail today; the transport variants are reserved for
/// a real backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    ValidationFailure(&'static str),
    #[allow(dead_code)]
    NetworkFailure,
    #[allow(dead_code)]
    ServerRejected,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::ValidationFailure(reason) => write!(f, "{reason}"),
            SubmissionError::NetworkFailure => write!(f, "Network error, please try again"),
            SubmissionError::ServerRejected => write!(f, "The server rejected the message"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl App {
    /// Fresh page state for a route, honouring the reduced-motion setting
    pub fn fresh_page(&self, route: Route) -> PageState {
        PageState::for_route(route, self.core.settings.display.reduced_motion)
    }

    /// Whether anything on screen needs the frame clock
    pub fn has_active_animations(&self) -> bool {
        if self.ui.page.scene().is_some() {
            return true;
        }
        if self.ui.page.reveal().is_animating() {
            return true;
        }
        if self.ui.ripples.any_active() {
            return true;
        }
        if let PageState::Projects { projects, .. } = &self.ui.page {
            if projects.card_hover.is_animating() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_requires_every_field() {
        let mut fields = ContactFields::default();
        assert!(matches!(
            fields.validate(),
            Err(SubmissionError::ValidationFailure(_))
        ));

        fields.name = "Ada".into();
        fields.email = "ada@example.com".into();
        fields.subject = "Edit".into();
        assert!(fields.validate().is_err());

        fields.message = "Hello".into();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_fail_validation() {
        let fields = ContactFields {
            name: "  ".into(),
            email: "a@b.c".into(),
            subject: "s".into(),
            message: "m".into(),
        };
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_page_state_matches_route() {
        assert!(matches!(
            PageState::for_route(Route::Projects, false),
            PageState::Projects { .. }
        ));
        assert!(
            PageState::for_route(Route::NotFound, false)
                .scene()
                .is_none()
        );
        assert!(
            PageState::for_route(Route::Home, false)
                .scene()
                .is_some_and(|scene| scene.kind() == SceneKind::Particles)
        );
    }

    #[test]
    fn test_reduced_motion_page_mounts_settled() {
        let page = PageState::for_route(Route::Stack, true);
        assert!(page.reveal().progress() >= 1.0);
        assert!(!page.reveal().is_animating());
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut fields = ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Edit".into(),
            message: "Hello".into(),
        };
        fields.clear();
        assert_eq!(fields, ContactFields::default());
    }
}
