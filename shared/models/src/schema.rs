//! Attribute keys and the destination column layout.

use serde::{Deserialize, Serialize};

use crate::DocumentKind;

/// Key tokens the configurator writes next to each engineering value.
///
/// The set is closed: every token here maps to one output column, except
/// [`AttributeKey::TopLevelHeight`] which feeds both TOR and the higher
/// conveyor height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    ModuleLength,
    BetweenFrames,
    Pitch,
    GearRatio,
    Power,
    Voltage,
    InterfaceType,
    SensorType,
    TopLevelHeight,
    ControlCard,
    ZoneLength,
    ElectricSide,
    SideGuideLeftType,
    SideGuideRightType,
    BusType,
    MscQuantity,
    MergeDivert,
    MergeDivertAngle,
    AlignmentAngle,
    MotorPosition,
    MotorManufacturer,
    FramebedType,
    SwordQuantity,
    CassetesQuantity,
    LowLevelHeight,
    SupportType,
}

impl AttributeKey {
    pub fn token(&self) -> &'static str {
        match self {
            Self::ModuleLength => "AT_MCP2_MOD_LEN_M",
            Self::BetweenFrames => "AT_MCP2_BTF_LEN_M",
            Self::Pitch => "AT_MCP2_PIT_M",
            Self::GearRatio => "AT_MCP2_GEA_01_RAT",
            Self::Power => "AT_MCP2_RD_POW_M",
            Self::Voltage => "AT_MCP2_RD_VOT",
            Self::InterfaceType => "AT_MCP2_RD_INT_TYP",
            Self::SensorType => "AT_MCP2_SEN_SPLR_01",
            Self::TopLevelHeight => "AT_MCP2_TOP_LVL_CNV_HEI_M",
            Self::ControlCard => "AT_MCP2_CTR_CRD_TYP",
            Self::ZoneLength => "AT_MCP2_ZON_LEN_M",
            Self::ElectricSide => "AT_MCP2_ELC_SID",
            Self::SideGuideLeftType => "AT_MCP2_SGD_LFT_TYP",
            Self::SideGuideRightType => "AT_MCP2_SGD_RGT_TYP",
            Self::BusType => "AT_MCP2_CTR_BUS_TYP",
            Self::MscQuantity => "AT_MCP2_ROL_MSC_01_QTY",
            Self::MergeDivert => "AT_MCP2_MRG_DIV_SEL",
            Self::MergeDivertAngle => "AT_MCP2_MOD_MRG_ANG",
            Self::AlignmentAngle => "AT_MCP2_FKT_ANG",
            Self::MotorPosition => "AT_MCP2_DRV_UNT_POS",
            Self::MotorManufacturer => "AT_MCP2_MOT_MNF",
            Self::FramebedType => "AT_MCP2_FRB_TYP",
            Self::SwordQuantity => "AT_MCP2_TRF_SWO_QTY",
            Self::CassetesQuantity => "AT_MCP2_CAS_QTY",
            Self::LowLevelHeight => "AT_MCP2_LOW_LVL_CNV_HEI_M",
            Self::SupportType => "AT_MCP2_SP_TYP_01",
        }
    }
}

/// Generic lookups in output column order, between Length and CreationDate.
pub const ATTRIBUTE_COLUMNS: [AttributeKey; 26] = [
    AttributeKey::BetweenFrames,
    AttributeKey::Pitch,
    AttributeKey::GearRatio,
    AttributeKey::Power,
    AttributeKey::Voltage,
    AttributeKey::InterfaceType,
    AttributeKey::SensorType,
    AttributeKey::TopLevelHeight, // TOR
    AttributeKey::ControlCard,
    AttributeKey::ZoneLength,
    AttributeKey::ElectricSide,
    AttributeKey::SideGuideLeftType,
    AttributeKey::SideGuideRightType,
    AttributeKey::BusType,
    AttributeKey::MscQuantity,
    AttributeKey::MergeDivert,
    AttributeKey::MergeDivertAngle,
    AttributeKey::AlignmentAngle,
    AttributeKey::MotorPosition,
    AttributeKey::MotorManufacturer,
    AttributeKey::FramebedType,
    AttributeKey::SwordQuantity,
    AttributeKey::CassetesQuantity,
    AttributeKey::LowLevelHeight,
    AttributeKey::TopLevelHeight, // higher conveyor height
    AttributeKey::SupportType,
];

pub const COLUMN_COUNT: usize = 33;

/// Header captions written when a destination sheet is created.
pub fn header_row(kind: DocumentKind) -> [&'static str; COLUMN_COUNT] {
    let (number, length) = match kind {
        DocumentKind::Order => ("Sales Order", "Length"),
        DocumentKind::Quotation => ("Quotation", "Module Length"),
    };
    [
        number,
        "Module",
        "Quantity",
        length,
        "Between Frames",
        "Pitch",
        "Gear Ratio",
        "Power (W)",
        "Voltage (V)",
        "Interface Type",
        "Sensor Type",
        "TOR",
        "Control Card",
        "Zone Length",
        "Eletric Side",
        "Side Guide Left Type",
        "Side Guide Right Type",
        "Bus Type",
        "MSC Quantity",
        "Merge/Divert",
        "Merge/Divert Angle",
        "Alignment Angle",
        "Motor Position",
        "Motor Manufacturer",
        "Framebed Type",
        "Sword Quantity",
        "Cassetes Quantity",
        "Lower Conveyor Height (TOR1)",
        "Higher Conveyor Height (TOR21)",
        "Support Type",
        "Creation Date",
        "Delivery Date",
        "Customer",
    ]
}
