mod bio_result;
mod error_banner;
mod option_group;
mod profile_form;

pub use bio_result::BioResult;
pub use error_banner::ErrorBanner;
pub use option_group::OptionGroupView;
pub use profile_form::ProfileFormView;
