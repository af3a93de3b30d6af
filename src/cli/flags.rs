use crate::pass::{CharClass, ClassFlags};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub default: bool,
    pub save: bool,
    pub quiet: bool,
    pub length: Option<String>,
    pub number: Option<usize>,
    pub classes: Option<ClassFlags>,
}

impl CliFlags {
    /// Enable `class`, starting from no classes on first use.
    pub fn enable(&mut self, class: CharClass) {
        self.classes
            .get_or_insert(ClassFlags::NONE)
            .set(class, true);
    }
}
