pub mod model;

// Book is the read side shared by persisted records and transfer objects.
pub trait Book: Sync + Send {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;
}
