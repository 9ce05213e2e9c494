use crate::entities::AmountField;

/// Stored amounts are whatever the form submitted: a number, a string, or
/// nothing at all. Absent and `null` both map to `None` at the field level.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(untagged)]
pub(crate) enum AmountModel {
    Number(f64),
    Text(String),
}

pub(crate) fn to_field(model: Option<AmountModel>) -> AmountField {
    match model {
        None => AmountField::Missing,
        Some(AmountModel::Number(n)) => AmountField::Number(n),
        Some(AmountModel::Text(s)) => AmountField::Text(s),
    }
}

pub(crate) fn from_field(field: &AmountField) -> Option<AmountModel> {
    match field {
        AmountField::Missing => None,
        AmountField::Number(n) => Some(AmountModel::Number(*n)),
        AmountField::Text(s) => Some(AmountModel::Text(s.clone())),
    }
}

/// Waybill numbers are entered through a numeric input but treated as
/// opaque labels, so either representation is accepted.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum LabelModel {
    Number(serde_json::Number),
    Text(String),
}

impl Into<String> for LabelModel {
    fn into(self) -> String {
        match self {
            LabelModel::Number(n) => n.to_string(),
            LabelModel::Text(s) => s,
        }
    }
}

pub(crate) fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let label: Option<LabelModel> = serde::Deserialize::deserialize(deserializer)?;
    Ok(label.map(Into::into).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde_derive::Deserialize)]
    struct Doc {
        #[serde(default)]
        amount: Option<AmountModel>,
        #[serde(default, deserialize_with = "deserialize_label")]
        label: String,
    }

    fn doc(json: &str) -> Doc {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_numbers_strings_and_nothing() {
        assert_eq!(to_field(doc(r#"{"amount": 12.5}"#).amount), AmountField::Number(12.5));
        assert_eq!(
            to_field(doc(r#"{"amount": "1,200"}"#).amount),
            AmountField::Text("1,200".to_string())
        );
        assert_eq!(to_field(doc(r#"{"amount": null}"#).amount), AmountField::Missing);
        assert_eq!(to_field(doc("{}").amount), AmountField::Missing);
    }

    #[test]
    fn labels_accept_numbers() {
        assert_eq!(doc(r#"{"label": 1001}"#).label, "1001");
        assert_eq!(doc(r#"{"label": "WB-7"}"#).label, "WB-7");
        assert_eq!(doc(r#"{"label": null}"#).label, "");
        assert_eq!(doc("{}").label, "");
    }
}
