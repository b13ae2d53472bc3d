pub mod bibliographic;
pub mod factory;
pub mod openlibrary;

#[cfg(test)]
pub mod stub;
