//! Applications and their campaign-level default settings.

use courier_model::{shape, string_enum};

use crate::campaign::{CampaignLimits, QuietTime};

string_enum! {
    /// How a campaign hook's function participates in delivery.
    pub enum HookMode {
        /// The function is notified of each delivery.
        Delivery => "DELIVERY",
        /// The function can rewrite or drop each message.
        Filter => "FILTER",
    }
}

shape! {
    /// An application registered with the service.
    pub struct ApplicationResponse {
        "Id" id: string,
        "Name" name: string,
        "Tags" tags: str_map,
    }
}

shape! {
    /// A function invoked around campaign deliveries.
    pub struct CampaignHook {
        "LambdaFunctionName" lambda_function_name: string,
        "Mode" mode: enum_str HookMode,
        /// Called over HTTPS instead of by function name.
        "WebUrl" web_url: string,
    }
}

shape! {
    /// Application-wide defaults campaigns inherit.
    pub struct ApplicationSettingsResource {
        "ApplicationId" application_id: string,
        "CampaignHook" campaign_hook: record CampaignHook,
        "LastModifiedDate" last_modified_date: timestamp,
        "Limits" limits: record CampaignLimits,
        "QuietTime" quiet_time: record QuietTime,
    }
}

shape! {
    /// Caller-controlled fields for updating application settings.
    pub struct WriteApplicationSettingsRequest {
        "CampaignHook" campaign_hook: record CampaignHook,
        "Limits" limits: record CampaignLimits,
        "QuietTime" quiet_time: record QuietTime,
    }
}
