//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page. `home` picks between the language screen, the
//! splash, and the invitation, and hosts the modal overlay.

pub mod home;
