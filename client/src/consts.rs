//! Shared constants for routes, static assets, and the school domain.

// ── Routes ──────────────────────────────────────────────────────

/// Public landing page with the hero banner.
pub const LANDING_PATH: &str = "/";

/// Student registration form.
pub const REGISTER_PATH: &str = "/register";

/// Existing-account login view.
pub const LOGIN_PATH: &str = "/login";

/// Post-registration landing area reached after the acknowledgment dialog.
pub const DASHBOARD_PATH: &str = "/dashboard";

// ── Assets ──────────────────────────────────────────────────────

/// Full-screen hero background image.
pub const HERO_BACKGROUND_URL: &str = "/assets/hero-background.jpg";

/// Organization logo shown above the registration form.
pub const LOGO_URL: &str = "/assets/logo.png";

/// Compiled stylesheet emitted by cargo-leptos.
pub const STYLESHEET_URL: &str = "/pkg/sccpag-register.css";

// ── School ──────────────────────────────────────────────────────

/// Domain every student email address must belong to.
pub const SCHOOL_EMAIL_DOMAIN: &str = "sccpag.edu.ph";
