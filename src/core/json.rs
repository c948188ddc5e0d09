use crate::core::enums::{Category, Disposition, Impact, Instance, ServiceArea};
use crate::core::errors::{Error, Result};
use crate::core::records::{
    ChangeAtom, ChangeEvent, EndpointRecord, ServiceEndpointSet, VersionSummary,
};
use crate::core::version_token::VersionToken;
use chrono::NaiveDate;
use serde::Deserialize;

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

// Wire-shape structs mirror the JSON emitted by the web service. Enumeration and version-token
// fields arrive as plain strings and are validated when a wire struct is converted into its
// typed record. Unknown fields are ignored; the service adds fields without versioning the
// schema.

/*--------------------------------------------------------------------------------------
  JSON Version Report
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
pub(crate) struct JsonVersionReport {
    pub instance: String,
    pub latest: String,
    pub versions: Option<Vec<String>>,
}

impl JsonVersionReport {
    pub(crate) fn into_record(self, index: usize) -> Result<VersionSummary> {
        let instance = parse_field(index, "instance", &self.instance, Instance::parse)?;
        let latest = parse_field(index, "latest", &self.latest, VersionToken::parse)?;
        let versions = self
            .versions
            .map(|versions| {
                versions
                    .iter()
                    .map(|version| parse_field(index, "versions", version, VersionToken::parse))
                    .collect::<Result<Vec<VersionToken>>>()
            })
            .transpose()?;

        Ok(VersionSummary {
            instance,
            latest,
            versions,
        })
    }
}

/*--------------------------------------------------------------------------------------
  JSON Endpoint Set
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonEndpointSet {
    pub service_area: String,

    #[serde(default)]
    pub urls: Vec<String>,

    pub ips: Option<Vec<String>>,
    pub tcp_ports: Option<String>,
    pub udp_ports: Option<String>,
    pub category: String,
    pub express_route: bool,
    pub required: bool,
    pub notes: Option<String>,
}

impl JsonEndpointSet {
    fn into_set(self, index: usize) -> Result<ServiceEndpointSet> {
        let service_area = parse_field(index, "serviceArea", &self.service_area, ServiceArea::parse)?;
        let category = parse_field(index, "category", &self.category, Category::parse)?;

        Ok(ServiceEndpointSet {
            service_area,
            urls: self.urls,
            ips: self.ips,
            tcp_ports: self.tcp_ports,
            udp_ports: self.udp_ports,
            category,
            express_route: self.express_route,
            required: self.required,
            notes: self.notes,
        })
    }
}

/*--------------------------------------------------------------------------------------
  JSON Endpoint Record
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonEndpointRecord {
    pub id: u32,
    pub service_area_display_name: Option<String>,

    #[serde(flatten)]
    pub endpoint_set: JsonEndpointSet,
}

impl JsonEndpointRecord {
    pub(crate) fn into_record(self, index: usize) -> Result<EndpointRecord> {
        Ok(EndpointRecord {
            id: self.id,
            service_area_display_name: self.service_area_display_name,
            endpoint_set: self.endpoint_set.into_set(index)?,
        })
    }
}

/*--------------------------------------------------------------------------------------
  JSON Change Atom
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
pub(crate) struct JsonChangeAtom {
    #[serde(rename = "effectiveDate", with = "crate::core::compact_date")]
    pub effective_date: NaiveDate,

    pub ips: Option<Vec<String>>,
    pub urls: Option<Vec<String>>,
}

impl From<JsonChangeAtom> for ChangeAtom {
    fn from(atom: JsonChangeAtom) -> Self {
        ChangeAtom {
            effective_date: atom.effective_date,
            ips: atom.ips,
            urls: atom.urls,
        }
    }
}

/*--------------------------------------------------------------------------------------
  JSON Change
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonChange {
    pub id: u32,
    pub endpoint_set_id: u32,
    pub disposition: String,
    pub impact: String,
    pub version: String,
    pub previous: Option<JsonEndpointSet>,
    pub current: Option<JsonEndpointSet>,
    pub add: Option<JsonChangeAtom>,
    pub remove: Option<JsonChangeAtom>,
}

impl JsonChange {
    pub(crate) fn into_record(self, index: usize) -> Result<ChangeEvent> {
        let disposition = parse_field(index, "disposition", &self.disposition, Disposition::parse)?;
        let impact = parse_field(index, "impact", &self.impact, Impact::parse)?;
        let version = parse_field(index, "version", &self.version, VersionToken::parse)?;
        let previous = self
            .previous
            .map(|snapshot| snapshot.into_set(index))
            .transpose()?;
        let current = self
            .current
            .map(|snapshot| snapshot.into_set(index))
            .transpose()?;

        Ok(ChangeEvent {
            id: self.id,
            endpoint_set_id: self.endpoint_set_id,
            disposition,
            impact,
            version,
            previous,
            current,
            add: self.add.map(ChangeAtom::from),
            remove: self.remove.map(ChangeAtom::from),
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

// Validate one field of one record, attaching the field name and record index on failure so the
// caller can tell exactly which record of the response was rejected.
fn parse_field<T>(
    index: usize,
    field: &'static str,
    value: &str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    parse(value).map_err(|source| Error::RecordValidation {
        field,
        value: value.to_string(),
        index,
        source: Box::new(source),
    })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    /*----------------------------------------------------------------------------------
      Version Report
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_version_report_with_history() {
        let json = r#"{
          "instance": "Worldwide",
          "latest": "2023040100",
          "versions": ["2023040100", "2023032801", "0000000000"]
        }"#;

        let wire: JsonVersionReport = serde_json::from_str(json).unwrap();
        let summary = wire.into_record(0).unwrap();

        assert_eq!(summary.instance, Instance::Worldwide);
        assert_eq!(summary.latest.to_string(), "2023040100");
        let versions = summary.versions.unwrap();
        assert_eq!(versions.len(), 3);
        assert!(versions[2].is_sentinel());
    }

    #[test]
    fn test_version_report_invalid_latest_cites_field() {
        let json = r#"{ "instance": "Worldwide", "latest": "not-a-version" }"#;

        let wire: JsonVersionReport = serde_json::from_str(json).unwrap();
        let error = wire.into_record(3).unwrap_err();

        match error {
            Error::RecordValidation {
                field,
                value,
                index,
                source,
            } => {
                assert_eq!(field, "latest");
                assert_eq!(value, "not-a-version");
                assert_eq!(index, 3);
                assert!(matches!(*source, Error::MalformedVersionToken { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /*----------------------------------------------------------------------------------
      Endpoint Record
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_endpoint_record_full_row() {
        let json = r#"{
          "id": 1,
          "serviceArea": "Exchange",
          "serviceAreaDisplayName": "Exchange Online",
          "urls": ["outlook.office.com", "outlook.office365.com"],
          "ips": ["13.107.6.152/31", "2603:1006::/40"],
          "tcpPorts": "80,443",
          "expressRoute": true,
          "required": true,
          "category": "Optimize"
        }"#;

        let wire: JsonEndpointRecord = serde_json::from_str(json).unwrap();
        let record = wire.into_record(0).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(
            record.service_area_display_name.as_deref(),
            Some("Exchange Online")
        );
        assert_eq!(record.endpoint_set.service_area, ServiceArea::Exchange);
        assert_eq!(record.endpoint_set.category, Category::Optimize);
        assert_eq!(record.endpoint_set.urls.len(), 2);
        assert_eq!(record.endpoint_set.ips.as_ref().unwrap().len(), 2);
        assert_eq!(record.endpoint_set.tcp_ports.as_deref(), Some("80,443"));
        assert_eq!(record.endpoint_set.udp_ports, None);
        assert!(record.endpoint_set.express_route);
    }

    #[test]
    fn test_endpoint_record_url_only_row_has_no_ips() {
        let json = r#"{
          "id": 46,
          "serviceArea": "Common",
          "urls": ["officecdn.microsoft.com"],
          "tcpPorts": "443",
          "expressRoute": false,
          "required": true,
          "category": "Default"
        }"#;

        let wire: JsonEndpointRecord = serde_json::from_str(json).unwrap();
        let record = wire.into_record(0).unwrap();

        assert_eq!(record.id, 46);
        assert_eq!(record.endpoint_set.ips, None);
        assert_eq!(record.service_area_display_name, None);
    }

    #[test]
    fn test_endpoint_record_unknown_fields_are_ignored() {
        let json = r#"{
          "id": 7,
          "serviceArea": "Skype",
          "urls": [],
          "expressRoute": false,
          "required": false,
          "category": "Allow",
          "futureSchemaField": {"nested": true}
        }"#;

        let wire: JsonEndpointRecord = serde_json::from_str(json).unwrap();
        assert!(wire.into_record(0).is_ok());
    }

    #[test]
    fn test_endpoint_record_unknown_service_area_cites_field() {
        let json = r#"{
          "id": 1,
          "serviceArea": "Unknown",
          "urls": [],
          "expressRoute": false,
          "required": true,
          "category": "Allow"
        }"#;

        let wire: JsonEndpointRecord = serde_json::from_str(json).unwrap();
        let error = wire.into_record(0).unwrap_err();

        match error {
            Error::RecordValidation {
                field,
                value,
                index,
                source,
            } => {
                assert_eq!(field, "serviceArea");
                assert_eq!(value, "Unknown");
                assert_eq!(index, 0);
                assert!(matches!(
                    *source,
                    Error::InvalidEnumValue {
                        category: "ServiceArea",
                        ..
                    }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /*----------------------------------------------------------------------------------
      Change Record
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_change_record_with_add_and_remove_payloads() {
        let json = r#"{
          "id": 424,
          "endpointSetId": 31,
          "disposition": "change",
          "impact": "AddedIpAndUrl",
          "version": "2023032801",
          "previous": {
            "serviceArea": "SharePoint",
            "urls": ["*.sharepoint.com"],
            "tcpPorts": "443",
            "expressRoute": true,
            "required": true,
            "category": "Optimize"
          },
          "current": {
            "serviceArea": "SharePoint",
            "urls": ["*.sharepoint.com", "*.sharepointonline.com"],
            "tcpPorts": "443",
            "expressRoute": true,
            "required": true,
            "category": "Optimize"
          },
          "add": {
            "effectiveDate": "20230401",
            "urls": ["*.sharepointonline.com"]
          },
          "remove": {
            "effectiveDate": "20230401",
            "ips": ["40.108.128.0/17"]
          }
        }"#;

        let wire: JsonChange = serde_json::from_str(json).unwrap();
        let change = wire.into_record(0).unwrap();

        assert_eq!(change.id, 424);
        assert_eq!(change.endpoint_set_id, 31);
        assert_eq!(change.disposition, Disposition::Change);
        assert_eq!(change.impact, Impact::AddedIpAndUrl);
        assert_eq!(change.version.to_string(), "2023032801");
        assert_eq!(change.previous.as_ref().unwrap().urls.len(), 1);
        assert_eq!(change.current.as_ref().unwrap().urls.len(), 2);

        let add = change.add.unwrap();
        assert_eq!(add.effective_date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
        assert_eq!(add.ips, None);

        let remove = change.remove.unwrap();
        assert_eq!(remove.urls, None);
        assert_eq!(remove.ips.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_change_record_addition_has_no_previous_snapshot() {
        let json = r#"{
          "id": 425,
          "endpointSetId": 99,
          "disposition": "add",
          "impact": "AddedUrl",
          "version": "2023040100",
          "current": {
            "serviceArea": "Common",
            "urls": ["config.office.com"],
            "tcpPorts": "443",
            "expressRoute": false,
            "required": true,
            "category": "Allow"
          }
        }"#;

        let wire: JsonChange = serde_json::from_str(json).unwrap();
        let change = wire.into_record(0).unwrap();

        assert_eq!(change.disposition, Disposition::Add);
        assert_eq!(change.previous, None);
        assert!(change.current.is_some());
        assert_eq!(change.add, None);
        assert_eq!(change.remove, None);
    }

    #[test]
    fn test_change_record_invalid_disposition_cites_field() {
        let json = r#"{
          "id": 1,
          "endpointSetId": 2,
          "disposition": "mutated",
          "impact": "AddedIp",
          "version": "2023040100"
        }"#;

        let wire: JsonChange = serde_json::from_str(json).unwrap();
        let error = wire.into_record(5).unwrap_err();

        match error {
            Error::RecordValidation { field, index, .. } => {
                assert_eq!(field, "disposition");
                assert_eq!(index, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_change_record_snapshot_validation_propagates() {
        let json = r#"{
          "id": 1,
          "endpointSetId": 2,
          "disposition": "change",
          "impact": "AddedIp",
          "version": "2023040100",
          "current": {
            "serviceArea": "Exchange",
            "urls": [],
            "expressRoute": false,
            "required": true,
            "category": "Blocked"
          }
        }"#;

        let wire: JsonChange = serde_json::from_str(json).unwrap();
        let error = wire.into_record(0).unwrap_err();

        assert!(matches!(
            error,
            Error::RecordValidation {
                field: "category",
                ..
            }
        ));
    }

    #[test]
    fn test_change_atom_rejects_non_compact_effective_date() {
        let json = r#"{ "effectiveDate": "2023-04-01" }"#;
        let result: std::result::Result<JsonChangeAtom, serde_json::Error> =
            serde_json::from_str(json);
        assert!(result.is_err());
    }
}
