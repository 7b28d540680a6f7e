//! Person entity constraints.
//!
//! Enforces the application-level shape of a Person: on creation all four
//! properties must be present, on update the email is immutable. Failed
//! validations carry a declarative constraint description so the caller can
//! render exactly what was violated, not just a message.

use thiserror::Error;

/// FOAF vocabulary used by the Person shape.
pub mod vocabulary {
    pub const PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    pub const EMAIL: &str = "http://xmlns.com/foaf/0.1/mbox";
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
    pub const LOCATION: &str = "http://xmlns.com/foaf/0.1/based_near";
    pub const WORKPLACE_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/workplaceHomepage";
}

/// A person record; every field is optional until validated mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub email: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub workplace_homepage: Option<String>,
}

impl Person {
    fn is_complete(&self) -> bool {
        self.email.is_some()
            && self.name.is_some()
            && self.location.is_some()
            && self.workplace_homepage.is_some()
    }
}

/// An entity paired with the semantic types asserted for it.
#[derive(Debug, Clone)]
pub struct Typed<T> {
    value: T,
    types: Vec<String>,
}

impl<T> Typed<T> {
    pub fn new(value: T, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            value,
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn has_type(&self, uri: &str) -> bool {
        self.types.iter().any(|t| t == uri)
    }
}

/// Requirement a property must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Exactly one value must be present.
    Mandatory,
    /// The property must keep this value.
    FixedValue(String),
}

/// One property of a shape with its requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyConstraint {
    pub property: String,
    pub requirement: Requirement,
}

/// What the constraint description applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every individual of the given type.
    Type(String),
    /// One specific individual, by its identity URI.
    Node(String),
}

/// Declarative shape description attached to validation failures.
/// Diagnostic payload only; it drives no control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub scope: Scope,
    pub shape: Vec<PropertyConstraint>,
}

impl Constraints {
    /// Shape for the Person type in general: all four properties mandatory.
    pub fn for_person_type() -> Self {
        Self {
            scope: Scope::Type(vocabulary::PERSON.to_string()),
            shape: person_shape(Requirement::Mandatory),
        }
    }

    /// Shape scoped to an existing person: the email is pinned to its
    /// current value, the remaining properties stay mandatory.
    pub fn for_person(current: &Person) -> Self {
        let identity = current.email.clone().unwrap_or_default();
        let email_requirement = match &current.email {
            Some(email) => Requirement::FixedValue(email.clone()),
            None => Requirement::Mandatory,
        };
        Self {
            scope: Scope::Node(identity),
            shape: person_shape(email_requirement),
        }
    }
}

fn person_shape(email_requirement: Requirement) -> Vec<PropertyConstraint> {
    vec![
        PropertyConstraint {
            property: vocabulary::EMAIL.to_string(),
            requirement: email_requirement,
        },
        PropertyConstraint {
            property: vocabulary::NAME.to_string(),
            requirement: Requirement::Mandatory,
        },
        PropertyConstraint {
            property: vocabulary::LOCATION.to_string(),
            requirement: Requirement::Mandatory,
        },
        PropertyConstraint {
            property: vocabulary::WORKPLACE_HOMEPAGE.to_string(),
            requirement: Requirement::Mandatory,
        },
    ]
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Incomplete person definition")]
    IncompleteDefinition { constraints: Constraints },
    #[error("Person email cannot be modified")]
    ImmutableFieldViolation { constraints: Constraints },
}

impl ValidationError {
    pub fn constraints(&self) -> &Constraints {
        match self {
            ValidationError::IncompleteDefinition { constraints }
            | ValidationError::ImmutableFieldViolation { constraints } => constraints,
        }
    }
}

/// Check a person submitted for creation: the PERSON type must be asserted
/// and all four properties present.
pub fn validate_for_creation(typed_person: &Typed<Person>) -> Result<(), ValidationError> {
    if !typed_person.has_type(vocabulary::PERSON) || !typed_person.get().is_complete() {
        return Err(ValidationError::IncompleteDefinition {
            constraints: Constraints::for_person_type(),
        });
    }
    Ok(())
}

/// Check an update against the current person: the email is immutable.
/// Other properties may change freely.
pub fn validate_for_update(
    current_person: &Person,
    updated_person: &Typed<Person>,
) -> Result<(), ValidationError> {
    if current_person.email != updated_person.get().email {
        return Err(ValidationError::ImmutableFieldViolation {
            constraints: Constraints::for_person(current_person),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_person() -> Person {
        Person {
            email: Some("mailto:ann@example.org".to_string()),
            name: Some("Ann".to_string()),
            location: Some("Madrid".to_string()),
            workplace_homepage: Some("http://example.org".to_string()),
        }
    }

    fn typed(person: Person) -> Typed<Person> {
        Typed::new(person, [vocabulary::PERSON])
    }

    #[test]
    fn creation_accepts_complete_typed_person() {
        assert!(validate_for_creation(&typed(complete_person())).is_ok());
    }

    #[test]
    fn creation_rejects_wrong_type() {
        let wrong = Typed::new(complete_person(), ["http://xmlns.com/foaf/0.1/Agent"]);
        let err = validate_for_creation(&wrong).unwrap_err();
        assert!(matches!(err, ValidationError::IncompleteDefinition { .. }));
    }

    #[test]
    fn creation_rejects_any_missing_field() {
        let omissions: [fn(&mut Person); 4] = [
            |p| p.email = None,
            |p| p.name = None,
            |p| p.location = None,
            |p| p.workplace_homepage = None,
        ];
        for omit in omissions {
            let mut person = complete_person();
            omit(&mut person);
            let err = validate_for_creation(&typed(person)).unwrap_err();
            assert!(matches!(err, ValidationError::IncompleteDefinition { .. }));
        }
    }

    #[test]
    fn creation_failure_carries_type_scoped_shape() {
        let err = validate_for_creation(&typed(Person::default())).unwrap_err();
        let constraints = err.constraints();
        assert_eq!(
            constraints.scope,
            Scope::Type(vocabulary::PERSON.to_string())
        );
        assert_eq!(constraints.shape.len(), 4);
        assert!(constraints
            .shape
            .iter()
            .all(|c| c.requirement == Requirement::Mandatory));
    }

    #[test]
    fn update_rejects_email_change() {
        let current = complete_person();
        let mut updated = complete_person();
        updated.email = Some("mailto:other@example.org".to_string());

        let err = validate_for_update(&current, &typed(updated)).unwrap_err();
        assert!(matches!(err, ValidationError::ImmutableFieldViolation { .. }));
    }

    #[test]
    fn update_failure_carries_node_scoped_shape() {
        let current = complete_person();
        let mut updated = complete_person();
        updated.email = None;

        let err = validate_for_update(&current, &typed(updated)).unwrap_err();
        let constraints = err.constraints();
        assert_eq!(
            constraints.scope,
            Scope::Node("mailto:ann@example.org".to_string())
        );
        let email = constraints
            .shape
            .iter()
            .find(|c| c.property == vocabulary::EMAIL)
            .unwrap();
        assert_eq!(
            email.requirement,
            Requirement::FixedValue("mailto:ann@example.org".to_string())
        );
    }

    #[test]
    fn update_allows_other_field_changes() {
        let current = complete_person();
        for mutate in [
            (|p: &mut Person| p.name = Some("Anna".to_string())) as fn(&mut Person),
            |p| p.location = Some("Lisbon".to_string()),
            |p| p.workplace_homepage = Some("http://example.net".to_string()),
        ] {
            let mut updated = complete_person();
            mutate(&mut updated);
            assert!(validate_for_update(&current, &typed(updated)).is_ok());
        }
    }

    #[test]
    fn update_treats_matching_absent_emails_as_equal() {
        let mut current = complete_person();
        current.email = None;
        let mut updated = complete_person();
        updated.email = None;
        assert!(validate_for_update(&current, &typed(updated)).is_ok());
    }
}
