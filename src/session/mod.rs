/*!
 * Managed session access.
 *
 * This module provides:
 * - `SessionTemplate`, the shared thread-safe proxy callers execute through
 * - `SessionAccessor`, wiring a factory or template into a component
 * - `Lifecycle`, the validation hook the host invokes before first use
 */

pub mod accessor;
pub mod template;

// Re-export main types
pub use accessor::{Lifecycle, SessionAccessor};
pub use template::SessionTemplate;
