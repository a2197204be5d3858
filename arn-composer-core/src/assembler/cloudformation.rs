//! CloudFormation expression assembly.
//!
//! Instead of a finished string, this assembler emits an `Fn::Join` tree
//! whose dynamic fields are `Ref`s to CloudFormation pseudo parameters,
//! resolved when the template is evaluated. It never contacts the
//! credentials collaborator.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::arn::ARN_PREFIX;
use crate::rules::Overrides;

use super::builder::ArnAssembler;

const PSEUDO_PARTITION: &str = "AWS::Partition";
const PSEUDO_REGION: &str = "AWS::Region";
const PSEUDO_ACCOUNT_ID: &str = "AWS::AccountId";

/// One fragment of a template expression: a literal string, or a `Ref` to a
/// pseudo parameter or caller-supplied logical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    Literal(String),
    Ref(String),
}

impl TemplatePart {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    pub fn partition() -> Self {
        Self::Ref(PSEUDO_PARTITION.to_string())
    }

    pub fn region() -> Self {
        Self::Ref(PSEUDO_REGION.to_string())
    }

    pub fn account_id() -> Self {
        Self::Ref(PSEUDO_ACCOUNT_ID.to_string())
    }
}

impl From<&str> for TemplatePart {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for TemplatePart {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl Serialize for TemplatePart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(text) => serializer.serialize_str(text),
            Self::Ref(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", name)?;
                map.end()
            }
        }
    }
}

/// The resource argument to [`ArnAssembler::cloudformation`]: a single
/// literal string, or an ordered list of parts joined without a separator,
/// e.g. `["table/", Ref("MyTable")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParts(Vec<TemplatePart>);

impl TemplateParts {
    /// The resource string used for rule lookup: the first part if it is a
    /// literal, otherwise empty. Later parts never participate in matching.
    fn lookup_resource(&self) -> &str {
        match self.0.first() {
            Some(TemplatePart::Literal(text)) => text,
            _ => "",
        }
    }
}

impl From<&str> for TemplateParts {
    fn from(resource: &str) -> Self {
        Self(vec![TemplatePart::from(resource)])
    }
}

impl From<String> for TemplateParts {
    fn from(resource: String) -> Self {
        Self(vec![TemplatePart::from(resource)])
    }
}

impl From<TemplatePart> for TemplateParts {
    fn from(part: TemplatePart) -> Self {
        Self(vec![part])
    }
}

impl From<Vec<TemplatePart>> for TemplateParts {
    fn from(parts: Vec<TemplatePart>) -> Self {
        Self(parts)
    }
}

/// A join-with-empty-separator expression, serialized as
/// `{"Fn::Join": ["", [...]]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnJoin {
    parts: Vec<TemplatePart>,
}

impl FnJoin {
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }
}

impl Serialize for FnJoin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Fn::Join", &("", &self.parts))?;
        map.end()
    }
}

impl ArnAssembler {
    /// Assemble an ARN as a CloudFormation expression.
    ///
    /// Partition, region, and account become pseudo-parameter `Ref`s; the
    /// rule table still decides which of region/account appear at all, based
    /// on the service and a literal first resource part.
    pub fn cloudformation(
        &self,
        service: &str,
        resource: impl Into<TemplateParts>,
        overrides: Overrides,
    ) -> FnJoin {
        let resource = resource.into();
        let needs = self
            .rules
            .requirements(service, resource.lookup_resource(), overrides);

        let mut parts = vec![
            TemplatePart::literal(format!("{ARN_PREFIX}:")),
            TemplatePart::partition(),
        ];

        match (needs.region, needs.account) {
            (true, true) => parts.extend([
                TemplatePart::literal(format!(":{service}:")),
                TemplatePart::region(),
                TemplatePart::literal(":"),
                TemplatePart::account_id(),
                TemplatePart::literal(":"),
            ]),
            (true, false) => parts.extend([
                TemplatePart::literal(format!(":{service}:")),
                TemplatePart::region(),
                TemplatePart::literal("::"),
            ]),
            (false, true) => parts.extend([
                TemplatePart::literal(format!(":{service}::")),
                TemplatePart::account_id(),
                TemplatePart::literal(":"),
            ]),
            (false, false) => parts.push(TemplatePart::literal(format!(":{service}:::"))),
        }

        parts.extend(resource.0);

        FnJoin { parts }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::rules::{Rule, RuleSet};

    use super::*;

    fn sample_rules() -> RuleSet {
        RuleSet::new(vec![
            Rule::new("s3").region(false).account(false),
            Rule::new("iam").region(false),
            Rule::new("apigateway").account(false),
            Rule::new("ec2")
                .resource_pattern("^image/")
                .unwrap()
                .account(false),
        ])
    }

    fn assembler() -> ArnAssembler {
        ArnAssembler::new(sample_rules())
    }

    #[test]
    fn test_cloudformation_with_region_and_account() {
        let expr = assembler().cloudformation(
            "dynamodb",
            vec![
                TemplatePart::literal("table/"),
                TemplatePart::reference("MyTable"),
            ],
            Overrides::default(),
        );

        assert_eq!(
            expr.parts(),
            [
                TemplatePart::literal("arn:"),
                TemplatePart::partition(),
                TemplatePart::literal(":dynamodb:"),
                TemplatePart::region(),
                TemplatePart::literal(":"),
                TemplatePart::account_id(),
                TemplatePart::literal(":"),
                TemplatePart::literal("table/"),
                TemplatePart::reference("MyTable"),
            ]
        );
    }

    #[test]
    fn test_cloudformation_with_region_only() {
        let expr = assembler().cloudformation("apigateway", "/restapis", Overrides::default());

        assert_eq!(
            expr.parts(),
            [
                TemplatePart::literal("arn:"),
                TemplatePart::partition(),
                TemplatePart::literal(":apigateway:"),
                TemplatePart::region(),
                TemplatePart::literal("::"),
                TemplatePart::literal("/restapis"),
            ]
        );
    }

    #[test]
    fn test_cloudformation_with_account_only() {
        let expr = assembler().cloudformation("iam", "role/my-role", Overrides::default());

        assert_eq!(
            expr.parts(),
            [
                TemplatePart::literal("arn:"),
                TemplatePart::partition(),
                TemplatePart::literal(":iam::"),
                TemplatePart::account_id(),
                TemplatePart::literal(":"),
                TemplatePart::literal("role/my-role"),
            ]
        );
    }

    #[test]
    fn test_cloudformation_with_neither_field() {
        let expr = assembler().cloudformation("s3", "my-bucket", Overrides::default());

        assert_eq!(
            expr.parts(),
            [
                TemplatePart::literal("arn:"),
                TemplatePart::partition(),
                TemplatePart::literal(":s3:::"),
                TemplatePart::literal("my-bucket"),
            ]
        );
    }

    #[test]
    fn test_cloudformation_literal_first_part_drives_rule_lookup() {
        let expr = assembler().cloudformation(
            "ec2",
            vec![
                TemplatePart::literal("image/"),
                TemplatePart::reference("MyAmi"),
            ],
            Overrides::default(),
        );

        // image/ rule drops the account field
        assert!(expr
            .parts()
            .contains(&TemplatePart::literal(":ec2:")));
        assert!(!expr.parts().contains(&TemplatePart::account_id()));
    }

    #[test]
    fn test_cloudformation_reference_first_part_skips_pattern_matching() {
        let expr = assembler().cloudformation(
            "ec2",
            vec![TemplatePart::reference("MyResource")],
            Overrides::default(),
        );

        // No literal to match the image/ pattern against, so both fields stay.
        assert!(expr.parts().contains(&TemplatePart::region()));
        assert!(expr.parts().contains(&TemplatePart::account_id()));
    }

    #[test]
    fn test_cloudformation_honors_overrides() {
        let expr = assembler().cloudformation(
            "s3",
            "my-bucket",
            Overrides {
                region: Some(true),
                account: None,
            },
        );

        assert!(expr.parts().contains(&TemplatePart::region()));
        assert!(!expr.parts().contains(&TemplatePart::account_id()));
    }

    #[test]
    fn test_fn_join_serializes_to_cloudformation_json() {
        let expr = assembler().cloudformation(
            "dynamodb",
            vec![
                TemplatePart::literal("table/"),
                TemplatePart::reference("MyTable"),
            ],
            Overrides::default(),
        );

        let value = serde_json::to_value(&expr).unwrap();
        assert_eq!(
            value,
            json!({
                "Fn::Join": ["", [
                    "arn:",
                    {"Ref": "AWS::Partition"},
                    ":dynamodb:",
                    {"Ref": "AWS::Region"},
                    ":",
                    {"Ref": "AWS::AccountId"},
                    ":",
                    "table/",
                    {"Ref": "MyTable"}
                ]]
            })
        );
    }

    #[test]
    fn test_template_parts_from_single_string() {
        let parts = TemplateParts::from("table/my-table");
        assert_eq!(parts.lookup_resource(), "table/my-table");
        assert_eq!(
            parts.0,
            vec![TemplatePart::literal("table/my-table")]
        );
    }
}
