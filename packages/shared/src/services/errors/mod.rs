pub mod catalog_service_errors;
