//! Campaigns: scheduled sends to a segment.
//!
//! A campaign couples a segment, a schedule, and per-channel message
//! templates. Treatments carve the audience into variants that each get
//! their own message and schedule; the holdout percentage is the slice
//! that receives nothing.

use courier_model::{shape, string_enum};

use crate::message::{Action, MessageType};

string_enum! {
    /// How often a campaign's schedule fires.
    pub enum Frequency {
        Once => "ONCE",
        Hourly => "HOURLY",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
    }
}

string_enum! {
    /// Lifecycle state of a campaign run.
    pub enum CampaignStatus {
        Scheduled => "SCHEDULED",
        Executing => "EXECUTING",
        PendingNextRun => "PENDING_NEXT_RUN",
        Completed => "COMPLETED",
        Paused => "PAUSED",
        Deleted => "DELETED",
    }
}

shape! {
    /// A daily window during which no messages are delivered.
    ///
    /// Times are `HH:MM` in the recipient's local timezone when the
    /// schedule is local-time based.
    pub struct QuietTime {
        "End" end: string,
        "Start" start: string,
    }
}

shape! {
    /// When and how often a campaign delivers.
    pub struct Schedule {
        /// When the schedule stops firing, RFC 3339.
        "EndTime" end_time: timestamp,
        "Frequency" frequency: enum_str Frequency,
        /// Evaluate the schedule in each recipient's local timezone.
        "IsLocalTime" is_local_time: boolean,
        "QuietTime" quiet_time: record QuietTime,
        /// When the schedule first fires, RFC 3339.
        "StartTime" start_time: timestamp,
        /// Base timezone for the start and end times.
        "Timezone" timezone: string,
    }
}

shape! {
    /// Delivery caps applied to a campaign.
    pub struct CampaignLimits {
        /// Messages per endpoint per 24 hours.
        "Daily" daily: integer,
        /// Minutes a run may keep delivering after its scheduled start.
        "MaximumDuration" maximum_duration: integer,
        "MessagesPerSecond" messages_per_second: integer,
        /// Messages per endpoint over the campaign's lifetime.
        "Total" total: integer,
    }
}

shape! {
    /// Message template for the push and in-app channels of a campaign.
    pub struct Message {
        "Action" action: enum_str Action,
        "Body" body: string,
        "ImageIconUrl" image_icon_url: string,
        "ImageUrl" image_url: string,
        /// Raw payload overriding the per-field content.
        "RawContent" raw_content: string,
        "SilentPush" silent_push: boolean,
        "TimeToLive" time_to_live: integer,
        "Title" title: string,
        "Url" url: string,
    }
}

shape! {
    /// Message template for the email channel of a campaign.
    pub struct CampaignEmailMessage {
        "Body" body: string,
        "FromAddress" from_address: string,
        "HtmlBody" html_body: string,
        "Title" title: string,
    }
}

shape! {
    /// Message template for the SMS channel of a campaign.
    pub struct CampaignSmsMessage {
        "Body" body: string,
        "MessageType" message_type: enum_str MessageType,
        "SenderId" sender_id: string,
    }
}

shape! {
    /// The per-channel message templates of one campaign or treatment.
    pub struct MessageConfiguration {
        /// Template for channels without a dedicated one.
        "DefaultMessage" default_message: record Message,
        "EmailMessage" email_message: record CampaignEmailMessage,
        "PushMessage" push_message: record Message,
        "SmsMessage" sms_message: record CampaignSmsMessage,
    }
}

shape! {
    /// Current status of a campaign, treatment, or run.
    pub struct CampaignState {
        "CampaignStatus" campaign_status: enum_str CampaignStatus,
    }
}

shape! {
    /// One audience variant of a campaign.
    pub struct TreatmentResource {
        "Id" id: string,
        "MessageConfiguration" message_configuration: record MessageConfiguration,
        "Schedule" schedule: record Schedule,
        /// Percentage of the audience allocated to this treatment.
        "SizePercent" size_percent: integer,
        "State" state: record CampaignState,
        "TreatmentDescription" treatment_description: string,
        "TreatmentName" treatment_name: string,
    }
}

shape! {
    /// A campaign as stored by the service.
    pub struct CampaignResponse {
        /// Variants beyond the default treatment.
        "AdditionalTreatments" additional_treatments: record_list TreatmentResource,
        "ApplicationId" application_id: string,
        "CreationDate" creation_date: timestamp,
        /// State the campaign returns to after a paused run.
        "DefaultState" default_state: record CampaignState,
        "Description" description: string,
        /// Percentage of the audience that receives nothing.
        "HoldoutPercent" holdout_percent: integer,
        "Id" id: string,
        "IsPaused" is_paused: boolean,
        "LastModifiedDate" last_modified_date: timestamp,
        "Limits" limits: record CampaignLimits,
        "MessageConfiguration" message_configuration: record MessageConfiguration,
        "Name" name: string,
        "Schedule" schedule: record Schedule,
        /// Segment the campaign addresses.
        "SegmentId" segment_id: string,
        "SegmentVersion" segment_version: integer,
        "State" state: record CampaignState,
        /// Arbitrary labels attached to the campaign.
        "Tags" tags: str_map,
        "TreatmentDescription" treatment_description: string,
        "TreatmentName" treatment_name: string,
        "Version" version: integer,
    }
}

shape! {
    /// Caller-controlled fields for creating or updating a campaign.
    pub struct WriteCampaignRequest {
        "AdditionalTreatments" additional_treatments: record_list TreatmentResource,
        "Description" description: string,
        "HoldoutPercent" holdout_percent: integer,
        "IsPaused" is_paused: boolean,
        "Limits" limits: record CampaignLimits,
        "MessageConfiguration" message_configuration: record MessageConfiguration,
        "Name" name: string,
        "Schedule" schedule: record Schedule,
        "SegmentId" segment_id: string,
        "SegmentVersion" segment_version: integer,
        "Tags" tags: str_map,
        "TreatmentDescription" treatment_description: string,
        "TreatmentName" treatment_name: string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treatment_lists_compare_element_by_element() {
        let build = |name: &str| {
            CampaignResponse::new().with_additional_treatments([
                TreatmentResource::new()
                    .with_treatment_name(name)
                    .with_size_percent(10),
            ])
        };
        assert_eq!(build("a"), build("a"));
        assert_ne!(build("a"), build("b"));
    }

    #[test]
    fn list_getter_exposes_the_stored_elements() {
        let resp = CampaignResponse::new().with_additional_treatments([
            TreatmentResource::new().with_treatment_name("variant-a"),
            TreatmentResource::new().with_treatment_name("variant-b"),
        ]);
        let treatments = resp.additional_treatments().unwrap();
        assert_eq!(treatments.len(), 2);
        assert_eq!(treatments[1].treatment_name(), Some("variant-b"));
    }

    #[test]
    fn live_list_handle_mutates_the_campaign() {
        let mut resp = CampaignResponse::new()
            .with_additional_treatments([TreatmentResource::new()]);
        resp.additional_treatments_mut()
            .unwrap()
            .push(TreatmentResource::new().with_treatment_name("late"));
        assert_eq!(resp.additional_treatments().unwrap().len(), 2);
    }
}
