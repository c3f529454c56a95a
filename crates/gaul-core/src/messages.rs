//! Localized user-facing messages.
//!
//! The set is closed and read-only; every kind renders in both locales and
//! nothing else ever crosses the orchestrator boundary.

use gaul_types::Language;

pub fn empty_query(language: Language) -> &'static str {
    match language {
        Language::En => "Search query cannot be empty.",
        Language::Id => "Kolom pencarian tidak boleh kosong.",
    }
}

pub fn no_interpretation(language: Language) -> &'static str {
    match language {
        Language::En => "Could not find an interpretation for the given term.",
        Language::Id => "Tidak dapat menemukan interpretasi untuk istilah yang diberikan.",
    }
}

pub fn unexpected(language: Language) -> &'static str {
    match language {
        Language::En => "An unexpected error occurred. Please try again later.",
        Language::Id => "Terjadi kesalahan tak terduga. Silakan coba lagi nanti.",
    }
}

pub fn comic_failed(language: Language) -> &'static str {
    match language {
        Language::En => "Could not generate the comic strip. Please try again.",
        Language::Id => "Tidak dapat membuat strip komik. Silakan coba lagi.",
    }
}
