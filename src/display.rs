use crate::domain::{AttributeValue, DeviceId, DeviceRecord, DeviceSummary, ExtensionAttributeEntry, InventoryFields, SearchMatch};

pub const NO_VALUE: &str = "No value";

pub fn render_summary(summary: &DeviceSummary) -> String {
    let mut out = header(summary.id, &summary.name, &summary.owner, &summary.last_checkin, &summary.last_inventory);

    section(&mut out, "Record", &inventory_lines(&summary.inventory));
    section(&mut out, "Printers", &summary.printers.join("\n"));
    section(&mut out, "Groups", &summary.groups.join("\n"));
    section(
        &mut out,
        "Extension attributes",
        &summary.extension_attributes.iter().map(render_attribute).collect::<String>(),
    );
    section(&mut out, "Profiles", &summary.profiles.join("\n"));
    section(
        &mut out,
        "Software",
        &summary
            .software
            .iter()
            .map(|entry| format!("{}:{}", entry.source.label(), entry.name))
            .collect::<Vec<_>>()
            .join("\n"),
    );
    section(&mut out, "Policies", &summary.policies.join("\n"));

    out
}

/// The current general and location fields of a device, without the directory lookups.
pub fn render_record(record: &DeviceRecord) -> String {
    let mut out = header(record.id, &record.name, &record.owner, &record.last_checkin, &record.last_inventory);
    section(&mut out, "Record", &inventory_lines(&record.inventory));
    out
}

pub fn render_search(matches: &[SearchMatch]) -> String {
    let mut out = format!("{} matches returned.\n", matches.len());
    for search_match in matches {
        out.push_str(&format!("{}\n", search_match));
    }
    out
}

fn header(id: DeviceId, name: &str, owner: &str, last_checkin: &Option<String>, last_inventory: &Option<String>) -> String {
    format!(
        "Name:           {} ({})\n\
         Owner:          {}\n\
         Last check-in:  {}\n\
         Last inventory: {}\n",
        name,
        id,
        or_no_value(Some(owner)),
        or_no_value(last_checkin.as_deref()),
        or_no_value(last_inventory.as_deref()),
    )
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("\n{}\n", title));
    let body = body.trim_end_matches('\n');
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
}

fn inventory_lines(inventory: &InventoryFields) -> String {
    let managed = inventory.managed.map(|managed| managed.to_string());
    inventory
        .labelled()
        .into_iter()
        .chain([("Managed", managed.as_deref().unwrap_or_default())])
        .map(|(label, value)| format!("{}:{}", label, or_no_value(Some(value))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name:value` on its own line. Multi-line values are written verbatim and end on a line break.
fn render_attribute(attribute: &ExtensionAttributeEntry) -> String {
    match &attribute.value {
        AttributeValue::Empty => format!("{}:{}\n", attribute.name, NO_VALUE),
        AttributeValue::Single(value) => format!("{}:{}\n", attribute.name, value),
        AttributeValue::MultiLine(value) if value.ends_with('\n') => format!("{}:{}", attribute.name, value),
        AttributeValue::MultiLine(value) => format!("{}:{}\n", attribute.name, value),
    }
}

fn or_no_value(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NO_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstallSource, SoftwareEntry};
    use pretty_assertions::assert_eq;

    fn inventory() -> InventoryFields {
        InventoryFields {
            asset_tag: "A-1007".to_string(),
            platform: "Mac".to_string(),
            managed: Some(true),
            username: "ada".to_string(),
            real_name: "Ada Lovelace".to_string(),
            building: "Babbage Hall".to_string(),
            ..InventoryFields::default()
        }
    }

    const RECORD_SECTION: &str = "\n\
         Record\n\
         Asset tag:A-1007\n\
         Barcode:No value\n\
         Platform:Mac\n\
         Username:ada\n\
         Email:No value\n\
         Full name:Ada Lovelace\n\
         Phone:No value\n\
         Building:Babbage Hall\n\
         Room:No value\n\
         Position:No value\n\
         Department:No value\n\
         Managed:true\n";

    fn summary() -> DeviceSummary {
        DeviceSummary {
            id: 42,
            name: "labmac-7".to_string(),
            owner: "Ada Lovelace".to_string(),
            last_checkin: Some("2017-06-01 08:15:02".to_string()),
            last_inventory: None,
            inventory: inventory(),
            printers: vec!["Library Laser".to_string(), "Lab Color".to_string()],
            groups: vec!["Lab-Macs".to_string(), "Staff".to_string()],
            extension_attributes: vec![
                ExtensionAttributeEntry {
                    name: "Local Admins".to_string(),
                    value: AttributeValue::MultiLine("root\nada".to_string()),
                },
                ExtensionAttributeEntry {
                    name: "Battery".to_string(),
                    value: AttributeValue::Single("Normal".to_string()),
                },
                ExtensionAttributeEntry {
                    name: "Asset Owner".to_string(),
                    value: AttributeValue::Empty,
                },
            ],
            profiles: vec!["Wi-Fi".to_string()],
            software: vec![
                SoftwareEntry {
                    source: InstallSource::ManagementTool,
                    name: "Office".to_string(),
                },
                SoftwareEntry {
                    source: InstallSource::Installer,
                    name: "Zoom".to_string(),
                },
            ],
            policies: vec![],
        }
    }

    #[test]
    fn render_summary_writes_every_section() {
        let rendered = render_summary(&summary());

        let expected_header = "Name:           labmac-7 (42)\n\
             Owner:          Ada Lovelace\n\
             Last check-in:  2017-06-01 08:15:02\n\
             Last inventory: No value\n";
        let expected_rest = "\n\
             Printers\n\
             Library Laser\n\
             Lab Color\n\
             \n\
             Groups\n\
             Lab-Macs\n\
             Staff\n\
             \n\
             Extension attributes\n\
             Local Admins:root\n\
             ada\n\
             Battery:Normal\n\
             Asset Owner:No value\n\
             \n\
             Profiles\n\
             Wi-Fi\n\
             \n\
             Software\n\
             Casper:Office\n\
             Installer:Zoom\n\
             \n\
             Policies\n";
        assert_eq!(rendered, format!("{}{}{}", expected_header, RECORD_SECTION, expected_rest));
    }

    #[test]
    fn multi_line_attribute_ends_its_own_line() {
        let mut summary = summary();
        summary.extension_attributes = vec![
            ExtensionAttributeEntry {
                name: "Local Admins".to_string(),
                value: AttributeValue::from("root\nada"),
            },
            ExtensionAttributeEntry {
                name: "Battery Health".to_string(),
                value: AttributeValue::from("Normal"),
            },
        ];

        let rendered = render_summary(&summary);

        assert!(rendered.contains("Extension attributes\nLocal Admins:root\nada\nBattery Health:Normal\n"));
    }

    #[test]
    fn multi_line_attribute_keeps_a_trailing_line_break_as_is() {
        let attribute = ExtensionAttributeEntry {
            name: "Local Admins".to_string(),
            value: AttributeValue::from("root\nada\n"),
        };

        assert_eq!(render_attribute(&attribute), "Local Admins:root\nada\n");
    }

    #[test]
    fn render_record_shows_the_editable_fields() {
        let record = DeviceRecord {
            id: 42,
            name: "labmac-7".to_string(),
            owner: "Ada Lovelace".to_string(),
            last_checkin: Some("".to_string()),
            inventory: inventory(),
            ..DeviceRecord::default()
        };

        assert_eq!(
            render_record(&record),
            format!(
                "Name:           labmac-7 (42)\n\
                 Owner:          Ada Lovelace\n\
                 Last check-in:  No value\n\
                 Last inventory: No value\n{}",
                RECORD_SECTION
            )
        );
    }

    #[test]
    fn unknown_management_state_has_no_value() {
        let record = DeviceRecord {
            inventory: InventoryFields::default(),
            ..DeviceRecord::default()
        };

        assert!(render_record(&record).ends_with("Managed:No value\n"));
    }

    #[test]
    fn render_search_lists_name_and_id() {
        let matches = vec![SearchMatch {
            sort_key: "labmac-0001".to_string(),
            name: "labmac-1".to_string(),
            id: 1,
        }];

        assert_eq!(render_search(&matches), "1 matches returned.\nlabmac-1 (1)\n");
    }
}
