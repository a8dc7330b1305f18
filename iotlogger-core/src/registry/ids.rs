//! Typed identifiers for views, buttons and areas

use core::fmt;

macro_rules! static_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name(pub &'static str);

        impl $name {
            pub const fn name(&self) -> &'static str {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

static_id!(
    /// Names a view (a mutually exclusive display group)
    ViewId
);
static_id!(
    /// Names an on-screen button
    ButtonId
);
static_id!(
    /// Names a text area
    AreaId
);

impl ViewId {
    pub const SPLASH: ViewId = ViewId("splash");
    pub const CHART: ViewId = ViewId("chart");
    pub const LOG: ViewId = ViewId("log");
}

impl ButtonId {
    /// Chart/log view switch
    pub const VIEW: ButtonId = ButtonId("view");
    /// Run/pause logging toggle
    pub const MODE: ButtonId = ButtonId("mode");
    /// Icon selector
    pub const ICON: ButtonId = ButtonId("icon");
    /// Color mode selector
    pub const COLOR: ButtonId = ButtonId("color");
}

impl AreaId {
    pub const HEADER: AreaId = AreaId("hdr");
    pub const STATUS: AreaId = AreaId("status");
    pub const COUNTER: AreaId = AreaId("counter");
    pub const LOG: AreaId = AreaId("log");
}
