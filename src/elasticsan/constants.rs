use crate::enums::open_enum;

open_enum! {
    pub enum PrivateEndpointServiceConnectionStatus {
        Approved => "Approved",
        Failed => "Failed",
        Pending => "Pending",
        Rejected => "Rejected",
    }
}

open_enum! {
    pub enum ProvisioningStates {
        Canceled => "Canceled",
        Creating => "Creating",
        Deleting => "Deleting",
        Failed => "Failed",
        Invalid => "Invalid",
        Pending => "Pending",
        Succeeded => "Succeeded",
        Updating => "Updating",
    }
}

open_enum! {
    pub enum PublicNetworkAccess {
        Disabled => "Disabled",
        Enabled => "Enabled",
    }
}

open_enum! {
    /// Redundancy of the SAN's storage
    pub enum SkuName {
        PremiumLrs => "Premium_LRS",
        PremiumZrs => "Premium_ZRS",
    }
}

open_enum! {
    pub enum SkuTier {
        Premium => "Premium",
    }
}
