use crate::enums::open_enum;

open_enum! {
    pub enum ActionType {
        Allow => "Allow",
        AnomalyScoring => "AnomalyScoring",
        Block => "Block",
        JsChallenge => "JSChallenge",
        Log => "Log",
    }
}

open_enum! {
    pub enum ApplicationGatewayFirewallRateLimitDuration {
        FiveMins => "FiveMins",
        OneMin => "OneMin",
    }
}

open_enum! {
    pub enum ApplicationGatewayFirewallUserSessionVariable {
        ClientAddr => "ClientAddr",
        GeoLocation => "GeoLocation",
        None => "None",
    }
}

open_enum! {
    pub enum ManagedRuleEnabledState {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    pub enum OwaspCrsExclusionEntryMatchVariable {
        RequestArgKeys => "RequestArgKeys",
        RequestArgNames => "RequestArgNames",
        RequestArgValues => "RequestArgValues",
        RequestCookieKeys => "RequestCookieKeys",
        RequestCookieNames => "RequestCookieNames",
        RequestCookieValues => "RequestCookieValues",
        RequestHeaderKeys => "RequestHeaderKeys",
        RequestHeaderNames => "RequestHeaderNames",
        RequestHeaderValues => "RequestHeaderValues",
    }
}

open_enum! {
    pub enum OwaspCrsExclusionEntrySelectorMatchOperator {
        Contains => "Contains",
        EndsWith => "EndsWith",
        Equals => "Equals",
        EqualsAny => "EqualsAny",
        StartsWith => "StartsWith",
    }
}

open_enum! {
    pub enum ProvisioningState {
        Deleting => "Deleting",
        Failed => "Failed",
        Succeeded => "Succeeded",
        Updating => "Updating",
    }
}

open_enum! {
    pub enum ScrubbingRuleEntryMatchOperator {
        Equals => "Equals",
        EqualsAny => "EqualsAny",
    }
}

open_enum! {
    pub enum ScrubbingRuleEntryMatchVariable {
        RequestArgNames => "RequestArgNames",
        RequestCookieNames => "RequestCookieNames",
        RequestHeaderNames => "RequestHeaderNames",
        RequestIpAddress => "RequestIPAddress",
        RequestJsonArgNames => "RequestJSONArgNames",
        RequestPostArgNames => "RequestPostArgNames",
    }
}

open_enum! {
    pub enum ScrubbingRuleEntryState {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    pub enum WebApplicationFirewallAction {
        Allow => "Allow",
        Block => "Block",
        JsChallenge => "JSChallenge",
        Log => "Log",
    }
}

open_enum! {
    pub enum WebApplicationFirewallEnabledState {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    pub enum WebApplicationFirewallMatchVariable {
        PostArgs => "PostArgs",
        QueryString => "QueryString",
        RemoteAddr => "RemoteAddr",
        RequestBody => "RequestBody",
        RequestCookies => "RequestCookies",
        RequestHeaders => "RequestHeaders",
        RequestMethod => "RequestMethod",
        RequestUri => "RequestUri",
    }
}

open_enum! {
    pub enum WebApplicationFirewallMode {
        Detection => "Detection",
        Prevention => "Prevention",
    }
}

open_enum! {
    pub enum WebApplicationFirewallOperator {
        Any => "Any",
        BeginsWith => "BeginsWith",
        Contains => "Contains",
        EndsWith => "EndsWith",
        Equal => "Equal",
        GeoMatch => "GeoMatch",
        GreaterThan => "GreaterThan",
        GreaterThanOrEqual => "GreaterThanOrEqual",
        IpMatch => "IPMatch",
        LessThan => "LessThan",
        LessThanOrEqual => "LessThanOrEqual",
        Regex => "Regex",
    }
}

open_enum! {
    pub enum WebApplicationFirewallPolicyResourceState {
        Creating => "Creating",
        Deleting => "Deleting",
        Disabled => "Disabled",
        Disabling => "Disabling",
        Enabled => "Enabled",
        Enabling => "Enabling",
    }
}

open_enum! {
    pub enum WebApplicationFirewallRuleType {
        Invalid => "Invalid",
        MatchRule => "MatchRule",
        RateLimitRule => "RateLimitRule",
    }
}

open_enum! {
    pub enum WebApplicationFirewallScrubbingState {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    pub enum WebApplicationFirewallState {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    pub enum WebApplicationFirewallTransform {
        HtmlEntityDecode => "HtmlEntityDecode",
        Lowercase => "Lowercase",
        RemoveNulls => "RemoveNulls",
        Trim => "Trim",
        UrlDecode => "UrlDecode",
        UrlEncode => "UrlEncode",
        Uppercase => "Uppercase",
    }
}
