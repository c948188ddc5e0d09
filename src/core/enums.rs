use crate::core::errors::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Instance
-------------------------------------------------------------------------------------------------*/

/// Office 365 instance - a physically and legally segmented deployment of the service.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum Instance {
    /// Worldwide-hosted instances, with the exception of the instances below.
    #[default]
    Worldwide,

    /// US Department of Defense instances.
    USGovDoD,

    /// US Government Community Cloud High instances.
    USGovGCCHigh,

    /// China instances, operated by 21Vianet in intra-country datacenters.
    China,

    /// Germany instances, hosted in intra-country datacenters.
    Germany,
}

impl Instance {
    /// All valid instance values.
    pub const VALUES: [Instance; 5] = [
        Instance::Worldwide,
        Instance::USGovDoD,
        Instance::USGovGCCHigh,
        Instance::China,
        Instance::Germany,
    ];

    /// Get the wire-format string for this instance.
    pub fn as_str(&self) -> &'static str {
        match self {
            Instance::Worldwide => "Worldwide",
            Instance::USGovDoD => "USGovDoD",
            Instance::USGovGCCHigh => "USGovGCCHigh",
            Instance::China => "China",
            Instance::Germany => "Germany",
        }
    }

    /// Parse an instance from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Worldwide" => Ok(Instance::Worldwide),
            "USGovDoD" => Ok(Instance::USGovDoD),
            "USGovGCCHigh" => Ok(Instance::USGovGCCHigh),
            "China" => Ok(Instance::China),
            "Germany" => Ok(Instance::Germany),
            _ => Err(Error::InvalidEnumValue {
                category: "Instance",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Instance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Instance::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Service Area
-------------------------------------------------------------------------------------------------*/

/// Functional grouping of Office 365 services used to filter endpoint data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ServiceArea {
    /// Shared infrastructure used by all service areas.
    Common,
    Exchange,
    SharePoint,
    Skype,
}

impl ServiceArea {
    /// All valid service area values.
    pub const VALUES: [ServiceArea; 4] = [
        ServiceArea::Common,
        ServiceArea::Exchange,
        ServiceArea::SharePoint,
        ServiceArea::Skype,
    ];

    /// Get the wire-format string for this service area.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceArea::Common => "Common",
            ServiceArea::Exchange => "Exchange",
            ServiceArea::SharePoint => "SharePoint",
            ServiceArea::Skype => "Skype",
        }
    }

    /// Parse a service area from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Common" => Ok(ServiceArea::Common),
            "Exchange" => Ok(ServiceArea::Exchange),
            "SharePoint" => Ok(ServiceArea::SharePoint),
            "Skype" => Ok(ServiceArea::Skype),
            _ => Err(Error::InvalidEnumValue {
                category: "ServiceArea",
                value: value.to_string(),
            }),
        }
    }

    /// Join service areas into the comma-separated string used as the `ServiceAreas` request
    /// parameter. The result is a filter value, not a new service area.
    ///
    /// ```
    /// use o365endpoints::ServiceArea;
    ///
    /// let areas = ServiceArea::combine([ServiceArea::Exchange, ServiceArea::SharePoint]);
    /// assert_eq!(areas, "Exchange,SharePoint");
    /// ```
    pub fn combine<I>(areas: I) -> String
    where
        I: IntoIterator<Item = ServiceArea>,
    {
        areas
            .into_iter()
            .map(|area| area.as_str())
            .collect::<Vec<&str>>()
            .join(",")
    }
}

impl fmt::Display for ServiceArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceArea {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ServiceArea::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Category
-------------------------------------------------------------------------------------------------*/

/// Connectivity category of an endpoint set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Category {
    Optimize,
    Allow,
    Default,
}

impl Category {
    /// All valid category values.
    pub const VALUES: [Category; 3] = [Category::Optimize, Category::Allow, Category::Default];

    /// Get the wire-format string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Optimize => "Optimize",
            Category::Allow => "Allow",
            Category::Default => "Default",
        }
    }

    /// Parse a category from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Optimize" => Ok(Category::Optimize),
            "Allow" => Ok(Category::Allow),
            "Default" => Ok(Category::Default),
            _ => Err(Error::InvalidEnumValue {
                category: "Category",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Disposition
-------------------------------------------------------------------------------------------------*/

/// Kind of change event that triggered a version increment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Change,
    Add,
    Remove,
}

impl Disposition {
    /// All valid disposition values.
    pub const VALUES: [Disposition; 3] =
        [Disposition::Change, Disposition::Add, Disposition::Remove];

    /// Get the wire-format string for this disposition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Change => "change",
            Disposition::Add => "add",
            Disposition::Remove => "remove",
        }
    }

    /// Parse a disposition from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "change" => Ok(Disposition::Change),
            "add" => Ok(Disposition::Add),
            "remove" => Ok(Disposition::Remove),
            _ => Err(Error::InvalidEnumValue {
                category: "Disposition",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Disposition::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Impact
-------------------------------------------------------------------------------------------------*/

/// Impact of not updating connectivity policy with the changes in a version.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Impact {
    AddedIp,
    AddedUrl,
    AddedIpAndUrl,
    RemovedIpOrUrl,
    ChangedIsExpressRoute,
    MovedIpOrUrl,
    RemovedDuplicateIpOrUrl,
    OtherNonPriorityChanges,
}

impl Impact {
    /// All valid impact values.
    pub const VALUES: [Impact; 8] = [
        Impact::AddedIp,
        Impact::AddedUrl,
        Impact::AddedIpAndUrl,
        Impact::RemovedIpOrUrl,
        Impact::ChangedIsExpressRoute,
        Impact::MovedIpOrUrl,
        Impact::RemovedDuplicateIpOrUrl,
        Impact::OtherNonPriorityChanges,
    ];

    /// Get the wire-format string for this impact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::AddedIp => "AddedIp",
            Impact::AddedUrl => "AddedUrl",
            Impact::AddedIpAndUrl => "AddedIpAndUrl",
            Impact::RemovedIpOrUrl => "RemovedIpOrUrl",
            Impact::ChangedIsExpressRoute => "ChangedIsExpressRoute",
            Impact::MovedIpOrUrl => "MovedIpOrUrl",
            Impact::RemovedDuplicateIpOrUrl => "RemovedDuplicateIpOrUrl",
            Impact::OtherNonPriorityChanges => "OtherNonPriorityChanges",
        }
    }

    /// Parse an impact from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "AddedIp" => Ok(Impact::AddedIp),
            "AddedUrl" => Ok(Impact::AddedUrl),
            "AddedIpAndUrl" => Ok(Impact::AddedIpAndUrl),
            "RemovedIpOrUrl" => Ok(Impact::RemovedIpOrUrl),
            "ChangedIsExpressRoute" => Ok(Impact::ChangedIsExpressRoute),
            "MovedIpOrUrl" => Ok(Impact::MovedIpOrUrl),
            "RemovedDuplicateIpOrUrl" => Ok(Impact::RemovedDuplicateIpOrUrl),
            "OtherNonPriorityChanges" => Ok(Impact::OtherNonPriorityChanges),
            _ => Err(Error::InvalidEnumValue {
                category: "Impact",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Impact::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Format
-------------------------------------------------------------------------------------------------*/

/// Response format requested from the web service.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Format {
    JSON,
    CSV,
}

impl Format {
    /// All valid format values.
    pub const VALUES: [Format; 2] = [Format::JSON, Format::CSV];

    /// Get the wire-format string for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::JSON => "JSON",
            Format::CSV => "CSV",
        }
    }

    /// Parse a format from its exact wire-format string; case-sensitive, no normalization.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "JSON" => Ok(Format::JSON),
            "CSV" => Ok(Format::CSV),
            _ => Err(Error::InvalidEnumValue {
                category: "Format",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::parse(s)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
