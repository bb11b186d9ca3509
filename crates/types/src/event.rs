//! Client-side event submissions.

use courier_model::shape;

shape! {
    /// The app session an event occurred in.
    pub struct Session {
        /// Session length in milliseconds.
        "Duration" duration: integer,
        "Id" id: string,
        "StartTimestamp" start_timestamp: timestamp,
        "StopTimestamp" stop_timestamp: timestamp,
    }
}

shape! {
    /// One event recorded by a client application.
    pub struct Event {
        "AppTitle" app_title: string,
        /// Custom attributes attached by the client.
        "Attributes" attributes: str_map,
        /// Name of the event, e.g. `_session.start`.
        "EventType" event_type: string,
        "SdkName" sdk_name: string,
        "Session" session: record Session,
        /// When the event occurred on the device, RFC 3339.
        "Timestamp" timestamp: timestamp,
    }
}
