/*!
 * Gettext catalog handling.
 *
 * - `document`: scanning and rendering of msgid/msgstr pairs
 * - `header`: the `Language:` header patch applied to generated catalogs
 */

pub use self::document::{CatalogDocument, CatalogEntry};
pub use self::header::patch_language_header;

pub mod document;
pub mod header;
