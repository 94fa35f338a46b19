// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod document_file_datasource;
        pub(crate) mod extraction_api_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod generate_content_model;
        pub(crate) mod media_type_model;
        pub(crate) mod raw_extraction_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod extraction_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod arrears;
        pub(crate) mod document;
        pub(crate) mod tax_record;
        pub(crate) mod validation_summary;
        pub(crate) mod year_range;
    }
    pub(crate) mod logic {
        pub(crate) mod bucket_classifier;
        pub(crate) mod record_normalizer;
        pub(crate) mod validation_engine;
    }
    pub(crate) mod repositories {
        pub(crate) mod extraction_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod process_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::arrears::*;
        pub use crate::domain::entities::document::*;
        pub use crate::domain::entities::tax_record::*;
        pub use crate::domain::entities::validation_summary::*;
        pub use crate::domain::entities::year_range::*;
    }
}
