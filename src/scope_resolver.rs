use crate::domain::Policy;
use crate::jss::domain::PolicyGet;

pub fn normalize(raw: PolicyGet) -> Policy {
    Policy {
        id: raw.general.id,
        name: raw.general.name,
        applies_to_all_devices: raw.scope.all_computers,
        scoped_device_ids: raw.scope.computers.into_iter().map(|computer| computer.id).collect(),
        scoped_group_names: raw.scope.computer_groups.into_iter().map(|group| group.name).collect(),
    }
}

/// Whether `policy` is in effect for a device that is a member of `device_groups`.
///
/// Group names match exactly, case included. Direct device scoping is not taken into account.
pub fn applies<S: AsRef<str>>(policy: &Policy, device_groups: &[S]) -> bool {
    policy.applies_to_all_devices || device_groups.iter().any(|group| policy.scoped_group_names.contains(group.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jss::domain::PolicyResponse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[test]
    fn normalize_extracts_name_id_and_scope() {
        let response: PolicyResponse = serde_json::from_str(include_str!("../tests/resources/policy_response.json")).unwrap();

        let policy = normalize(response.policy);

        assert_eq!(
            policy,
            Policy {
                id: 12,
                name: "Install Office".to_string(),
                applies_to_all_devices: false,
                scoped_device_ids: BTreeSet::from([4, 7]),
                scoped_group_names: BTreeSet::from(["Staff".to_string(), "Lab-Macs".to_string()]),
            }
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&["Staff"])]
    #[case(&["Unrelated", "Other"])]
    fn applies_is_true_for_every_group_list_when_scoped_to_all(#[case] groups: &[&str]) {
        let policy = Policy::for_all(1, "Update Inventory");

        assert!(applies(&policy, groups));
    }

    #[rstest]
    #[case(&["Staff"], true)]
    #[case(&["Lab-Macs", "Staff"], true)]
    #[case(&["Faculty"], false)]
    #[case(&["staff"], false)]
    #[case(&[], false)]
    fn applies_requires_a_shared_group(#[case] groups: &[&str], #[case] expected: bool) {
        let policy = Policy::for_groups(2, "Install Office", &["Staff", "Admins"]);

        assert_eq!(applies(&policy, groups), expected);
    }

    #[test]
    fn applies_ignores_direct_device_scoping() {
        let mut policy = Policy::for_groups(3, "Firmware Password", &[]);
        policy.scoped_device_ids.insert(42);

        assert!(!applies(&policy, &["Staff"]));
    }
}
