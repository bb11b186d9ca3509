//! Direct message payloads and send results.
//!
//! A direct send addresses specific recipients rather than a segment:
//! the request carries one message body per channel plus optional
//! per-address overrides, and the response reports one result per
//! addressed recipient.

use courier_model::{shape, string_enum};

use crate::channel::ChannelType;

string_enum! {
    /// What happens on the recipient's device when a push notification
    /// is tapped.
    pub enum Action {
        /// Open the app, or bring it to the foreground.
        OpenApp => "OPEN_APP",
        /// Open a designated view inside the app.
        DeepLink => "DEEP_LINK",
        /// Open a web page in the device browser.
        Url => "URL",
    }
}

string_enum! {
    /// Traffic class of an SMS message.
    pub enum MessageType {
        Transactional => "TRANSACTIONAL",
        Promotional => "PROMOTIONAL",
    }
}

string_enum! {
    /// Delivery outcome for one addressed recipient.
    pub enum DeliveryStatus {
        Successful => "SUCCESSFUL",
        Throttled => "THROTTLED",
        TemporaryFailure => "TEMPORARY_FAILURE",
        PermanentFailure => "PERMANENT_FAILURE",
        UnknownFailure => "UNKNOWN_FAILURE",
        OptOut => "OPT_OUT",
        Duplicate => "DUPLICATE",
    }
}

shape! {
    /// A one-time message sent through the push channel.
    pub struct PushMessage {
        /// Tap behavior. Defaults to opening the app when unset.
        "Action" action: enum_str Action,
        /// Body text of the notification.
        "Body" body: string,
        /// Data payload delivered with a silent push.
        "Data" data: str_map,
        /// URL of the icon shown in the notification content view.
        "ImageIconUrl" image_icon_url: string,
        /// URL of an image shown in the notification.
        "ImageUrl" image_url: string,
        /// Raw payload to send verbatim, overriding every other
        /// content field.
        "RawContent" raw_content: string,
        /// Deliver without notifying the recipient.
        "SilentPush" silent_push: boolean,
        "Sound" sound: string,
        /// Per-variable substitutions applied to the message template.
        "Substitutions" substitutions: str_list_map,
        /// Seconds the push service may retry delivery before dropping
        /// the message.
        "TimeToLive" time_to_live: integer,
        "Title" title: string,
        /// Page opened when the action is `URL`.
        "Url" url: string,
    }
}

shape! {
    /// A one-time message sent through the SMS channel.
    pub struct SmsMessage {
        "Body" body: string,
        /// Keyword the recipient can reply with.
        "Keyword" keyword: string,
        /// Traffic class; transactional traffic is prioritized.
        "MessageType" message_type: enum_str MessageType,
        /// Long code or short code to send from.
        "OriginationNumber" origination_number: string,
        "SenderId" sender_id: string,
        "Substitutions" substitutions: str_list_map,
    }
}

shape! {
    /// A one-time message sent through the email channel.
    pub struct EmailMessage {
        /// Body used when the recipient's client cannot render HTML.
        "Body" body: string,
        /// Address replies are delivered to.
        "FeedbackForwardingAddress" feedback_forwarding_address: string,
        /// Overrides the channel's configured from-address.
        "FromAddress" from_address: string,
        "HtmlBody" html_body: string,
        "Subject" subject: string,
        "Substitutions" substitutions: str_list_map,
    }
}

shape! {
    /// Fallback message for channels without a dedicated payload.
    pub struct DefaultMessage {
        "Body" body: string,
        "Substitutions" substitutions: str_list_map,
    }
}

shape! {
    /// The per-channel message bodies of one direct send.
    ///
    /// Channels with a dedicated payload use it; every other channel
    /// falls back to the default message.
    pub struct DirectMessageConfiguration {
        "DefaultMessage" default_message: record DefaultMessage,
        "EmailMessage" email_message: record EmailMessage,
        "PushMessage" push_message: record PushMessage,
        "SmsMessage" sms_message: record SmsMessage,
    }
}

shape! {
    /// Per-recipient overrides applied on top of the channel payload.
    pub struct AddressConfiguration {
        /// Replaces the message body for this recipient only.
        "BodyOverride" body_override: string,
        /// Channel to deliver through for this address.
        "ChannelType" channel_type: enum_str ChannelType,
        /// Free-form key-value pairs attached to delivery receipts.
        "Context" context: str_map,
        "RawContent" raw_content: string,
        "Substitutions" substitutions: str_list_map,
        "TitleOverride" title_override: string,
    }
}

shape! {
    /// A request to send one message to specific recipients.
    pub struct MessageRequest {
        /// Key-value pairs echoed back in event attributes.
        "Context" context: str_map,
        "MessageConfiguration" message_configuration: record DirectMessageConfiguration,
        /// Caller-supplied identifier for tracing the send.
        "TraceId" trace_id: string,
    }
}

shape! {
    /// Delivery outcome for one addressed recipient.
    pub struct MessageResult {
        /// The address this result refers to.
        "Address" address: string,
        "DeliveryStatus" delivery_status: enum_str DeliveryStatus,
        /// Identifier of the delivered message, when one was created.
        "MessageId" message_id: string,
        /// Downstream status code for the delivery attempt.
        "StatusCode" status_code: integer,
        "StatusMessage" status_message: string,
    }
}

shape! {
    /// The outcome of a direct send.
    pub struct MessageResponse {
        "ApplicationId" application_id: string,
        "RequestId" request_id: string,
        /// One result per addressed recipient.
        "Result" result: record_list MessageResult,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_and_raw_string_mutators_store_the_same_value() {
        let via_enum = PushMessage::new().with_action(Action::DeepLink);
        let via_str = PushMessage::new().with_action("DEEP_LINK");
        assert_eq!(via_enum, via_str);
        assert_eq!(via_enum.action(), Some("DEEP_LINK"));
    }

    #[test]
    fn raw_string_mutator_accepts_values_the_enum_does_not_name() {
        let msg = SmsMessage::new().with_message_type("BULK_V2");
        assert_eq!(msg.message_type(), Some("BULK_V2"));
    }

    #[test]
    fn duplicate_data_key_is_rejected_and_first_entry_kept() {
        let mut msg = PushMessage::new();
        msg.add_data_entry("origin", "inbox").unwrap();
        let err = msg.add_data_entry("origin", "banner").unwrap_err();
        assert_eq!(err.to_string(), "duplicate key (origin) for field Data");
        assert_eq!(
            msg.data().unwrap().get("origin").map(String::as_str),
            Some("inbox"),
        );
    }

    #[test]
    fn clearing_entries_resets_the_field_to_unset() {
        let mut msg = PushMessage::new();
        msg.add_data_entry("k", "v").unwrap();
        msg.clear_data_entries();
        assert_eq!(msg.data(), None);
    }

    #[test]
    fn nested_messages_compare_through_the_composite() {
        let a = DirectMessageConfiguration::new()
            .with_default_message(DefaultMessage::new().with_body("hello"));
        let b = DirectMessageConfiguration::new()
            .with_default_message(DefaultMessage::new().with_body("hello"));
        let c = DirectMessageConfiguration::new()
            .with_default_message(DefaultMessage::new().with_body("goodbye"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn composite_rendering_recurses_into_nested_shapes() {
        let req = MessageRequest::new()
            .with_message_configuration(
                DirectMessageConfiguration::new()
                    .with_sms_message(SmsMessage::new().with_body("ping")),
            )
            .with_trace_id("t-1");
        assert_eq!(
            req.to_string(),
            "{MessageConfiguration: {SmsMessage: {Body: ping}},TraceId: t-1}",
        );
    }
}
