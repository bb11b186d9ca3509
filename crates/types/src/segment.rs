//! Audience segments.
//!
//! A segment is either dimensional (computed from endpoint data at send
//! time) or imported (a fixed list of endpoints loaded from storage).

use courier_model::{shape, string_enum};

string_enum! {
    /// How a segment's membership is determined.
    pub enum SegmentType {
        /// Computed from dimension criteria at send time.
        Dimensional => "DIMENSIONAL",
        /// Fixed membership loaded by an import job.
        Import => "IMPORT",
    }
}

string_enum! {
    /// Whether recency selects recently active or recently inactive
    /// endpoints.
    pub enum RecencyType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// Look-back window for a recency dimension.
    pub enum RecencyDuration {
        Hr24 => "HR_24",
        Day7 => "DAY_7",
        Day14 => "DAY_14",
        Day30 => "DAY_30",
    }
}

string_enum! {
    /// File format of an imported endpoint list.
    pub enum ImportFormat {
        Csv => "CSV",
        Json => "JSON",
    }
}

shape! {
    /// Selects endpoints by how recently they were active.
    pub struct RecencyDimension {
        "Duration" duration: enum_str RecencyDuration,
        "RecencyType" recency_type: enum_str RecencyType,
    }
}

shape! {
    /// Behavioral criteria of a dimensional segment.
    pub struct SegmentBehaviors {
        "Recency" recency: record RecencyDimension,
    }
}

shape! {
    /// The criteria a dimensional segment selects on.
    pub struct SegmentDimensions {
        "Behavior" behavior: record SegmentBehaviors,
    }
}

shape! {
    /// Source metadata of an imported segment.
    pub struct SegmentImportResource {
        /// Identifier carried over from the external system.
        "ExternalId" external_id: string,
        "Format" format: enum_str ImportFormat,
        /// Role the import job assumed to read the source.
        "RoleArn" role_arn: string,
        /// Location the endpoint list was loaded from.
        "S3Url" s3_url: string,
        /// Number of endpoints imported.
        "Size" size: integer,
    }
}

shape! {
    /// A segment as stored by the service.
    pub struct SegmentResponse {
        "ApplicationId" application_id: string,
        "CreationDate" creation_date: timestamp,
        "Dimensions" dimensions: record SegmentDimensions,
        "Id" id: string,
        "ImportDefinition" import_definition: record SegmentImportResource,
        "LastModifiedDate" last_modified_date: timestamp,
        "Name" name: string,
        "SegmentType" segment_type: enum_str SegmentType,
        "Tags" tags: str_map,
        "Version" version: integer,
    }
}

shape! {
    /// Caller-controlled fields for creating or updating a segment.
    pub struct WriteSegmentRequest {
        "Dimensions" dimensions: record SegmentDimensions,
        "Name" name: string,
        "Tags" tags: str_map,
    }
}
