use super::waybill::{ModeOfService, ModeOfTransport};

/// A fixed vocabulary of named boolean flags, in declaration order.
pub trait ModeFlags {
    fn flags(&self) -> Vec<(&str, bool)>;
}

impl ModeFlags for ModeOfTransport {
    fn flags(&self) -> Vec<(&str, bool)> {
        vec![("air", self.air), ("land", self.land), ("sea", self.sea)]
    }
}

impl ModeFlags for ModeOfService {
    fn flags(&self) -> Vec<(&str, bool)> {
        vec![
            ("doorDoor", self.door_door),
            ("doorPier", self.door_pier),
            ("pierDoor", self.pier_door),
            ("pierPier", self.pier_pier),
        ]
    }
}

impl<'a> ModeFlags for [(&'a str, bool)] {
    fn flags(&self) -> Vec<(&str, bool)> {
        self.iter().map(|(key, value)| (*key, *value)).collect()
    }
}
