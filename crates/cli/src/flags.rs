use clap::ValueEnum;
use funcharvest_splitter::Language;

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum LanguageFlag {
    Python,
    Javascript,
    Java,
}

impl LanguageFlag {
    pub(crate) const fn as_domain(self) -> Language {
        match self {
            LanguageFlag::Python => Language::Python,
            LanguageFlag::Javascript => Language::JavaScript,
            LanguageFlag::Java => Language::Java,
        }
    }
}
