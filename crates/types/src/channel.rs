//! Per-channel delivery configuration.
//!
//! A channel is the per-application binding between Courier and one
//! delivery backend. Request shapes carry the caller-controlled
//! settings; response shapes add the service-managed audit fields
//! (identifiers, credential status, timestamps, version counter).

use courier_model::{shape, string_enum};

string_enum! {
    /// Delivery backend a message or endpoint is bound to.
    pub enum ChannelType {
        Push => "PUSH",
        Email => "EMAIL",
        Sms => "SMS",
        InApp => "IN_APP",
    }
}

shape! {
    /// Settings for enabling an application's email channel.
    pub struct EmailChannelRequest {
        /// Whether sending through this channel is enabled.
        "Enabled" enabled: boolean,
        /// Verified address the application sends from.
        "FromAddress" from_address: string,
        /// Sending identity the service uses for this application.
        "Identity" identity: string,
        /// Delivery configuration set applied to outgoing mail.
        "ConfigurationSet" configuration_set: string,
    }
}

shape! {
    /// Status and settings of an application's email channel.
    pub struct EmailChannelResponse {
        /// Application the channel belongs to.
        "ApplicationId" application_id: string,
        "ConfigurationSet" configuration_set: string,
        /// When the channel was enabled, RFC 3339.
        "CreationDate" creation_date: timestamp,
        "Enabled" enabled: boolean,
        "FromAddress" from_address: string,
        /// Whether the channel has a sending credential configured.
        "HasCredential" has_credential: boolean,
        "Id" id: string,
        "Identity" identity: string,
        "IsArchived" is_archived: boolean,
        "LastModifiedBy" last_modified_by: string,
        "LastModifiedDate" last_modified_date: timestamp,
        /// Per-second send quota granted to the application.
        "MessagesPerSecond" messages_per_second: integer,
        /// Always `"EMAIL"`.
        "Platform" platform: string,
        /// Server-side revision counter, bumped on every update.
        "Version" version: integer,
    }
}

shape! {
    /// Settings for enabling an application's push channel.
    pub struct PushChannelRequest {
        /// Credential the push backend authenticates with.
        "ApiKey" api_key: string,
        "Enabled" enabled: boolean,
    }
}

shape! {
    /// Status and settings of an application's push channel.
    pub struct PushChannelResponse {
        "ApplicationId" application_id: string,
        "CreationDate" creation_date: timestamp,
        "Credential" credential: string,
        "Enabled" enabled: boolean,
        "HasCredential" has_credential: boolean,
        "Id" id: string,
        "IsArchived" is_archived: boolean,
        "LastModifiedBy" last_modified_by: string,
        "LastModifiedDate" last_modified_date: timestamp,
        /// Always `"PUSH"`.
        "Platform" platform: string,
        "Version" version: integer,
    }
}

shape! {
    /// Settings for enabling an application's SMS channel.
    pub struct SmsChannelRequest {
        "Enabled" enabled: boolean,
        /// Alphanumeric sender shown on recipients' devices.
        "SenderId" sender_id: string,
        /// Registered short code to send from.
        "ShortCode" short_code: string,
    }
}

shape! {
    /// Status and settings of an application's SMS channel.
    pub struct SmsChannelResponse {
        "ApplicationId" application_id: string,
        "CreationDate" creation_date: timestamp,
        "Enabled" enabled: boolean,
        "HasCredential" has_credential: boolean,
        "Id" id: string,
        "IsArchived" is_archived: boolean,
        "LastModifiedBy" last_modified_by: string,
        "LastModifiedDate" last_modified_date: timestamp,
        /// Always `"SMS"`.
        "Platform" platform: string,
        /// Send quota for promotional traffic.
        "PromotionalMessagesPerSecond" promotional_messages_per_second: integer,
        "SenderId" sender_id: string,
        "ShortCode" short_code: string,
        /// Send quota for transactional traffic.
        "TransactionalMessagesPerSecond" transactional_messages_per_second: integer,
        "Version" version: integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_model::hash::StructuralHash;

    #[test]
    fn renders_only_the_set_fields_in_declared_order() {
        let resp = EmailChannelResponse::new()
            .with_application_id("app-1")
            .with_enabled(true);
        assert_eq!(resp.to_string(), "{ApplicationId: app-1,Enabled: true}");
    }

    #[test]
    fn independently_built_responses_agree_on_equality_and_hash() {
        let a = EmailChannelResponse::new()
            .with_application_id("app-1")
            .with_enabled(true);
        let b = EmailChannelResponse::new()
            .with_application_id("app-1")
            .with_enabled(true);
        assert_eq!(a, b);
        assert_eq!(a.structural_hash(), b.structural_hash());

        let c = EmailChannelResponse::new()
            .with_application_id("app-1")
            .with_enabled(false);
        assert_ne!(a, c);
    }

    #[test]
    fn channel_type_converts_to_its_wire_string() {
        use courier_model::WireEnum;
        assert_eq!(ChannelType::InApp.as_str(), "IN_APP");
        assert_eq!(ChannelType::from_value("SMS"), Some(ChannelType::Sms));
    }
}
