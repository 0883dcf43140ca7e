mod graphql_parse_error_tests;
mod reduce_dispatch_tests;
mod selection_tests;
mod type_system_tests;
mod utils;
