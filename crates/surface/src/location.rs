use model::{CITY_HALL, LatLng};

/// Location permissions the viewer needs before it may read a fix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Permission {
    CoarseLocation,
    FineLocation,
}

/// The fixed set checked before any location lookup.
pub const REQUIRED_PERMISSIONS: [Permission; 2] =
    [Permission::CoarseLocation, Permission::FineLocation];

/// Host-side permission state.
pub trait Permissions {
    fn granted(&self, permission: Permission) -> bool;

    /// True when every required permission is granted.
    fn all_granted(&self) -> bool {
        REQUIRED_PERMISSIONS.iter().all(|p| self.granted(*p))
    }
}

/// Fixed permission state, for tests and headless runs.
#[derive(Debug, Default)]
pub struct StaticPermissions {
    granted: Vec<Permission>,
}

impl StaticPermissions {
    pub fn all() -> Self {
        Self {
            granted: REQUIRED_PERMISSIONS.to_vec(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(granted: Vec<Permission>) -> Self {
        Self { granted }
    }
}

impl Permissions for StaticPermissions {
    fn granted(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }
}

/// Last-known-location lookup by provider name; no active updates.
pub trait LocationProvider {
    fn last_known(&self, provider: &str) -> Option<LatLng>;
}

/// Provider with a fixed answer, for tests and headless runs.
#[derive(Debug, Default)]
pub struct StaticProvider {
    fix: Option<LatLng>,
}

impl StaticProvider {
    pub fn with_fix(fix: LatLng) -> Self {
        Self { fix: Some(fix) }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl LocationProvider for StaticProvider {
    fn last_known(&self, _provider: &str) -> Option<LatLng> {
        self.fix
    }
}

/// GPS provider name used for every lookup.
pub const GPS_PROVIDER: &str = "gps";

/// Returns the last-known GPS fix, or City Hall when permissions are
/// missing or no fix exists.
pub fn locate_or_default(
    provider: &dyn LocationProvider,
    permissions: &dyn Permissions,
) -> LatLng {
    if !permissions.all_granted() {
        return CITY_HALL;
    }
    provider.last_known(GPS_PROVIDER).unwrap_or(CITY_HALL)
}

#[cfg(test)]
mod tests {
    use model::{CITY_HALL, LatLng};

    use super::{
        Permission, Permissions, StaticPermissions, StaticProvider, locate_or_default,
    };

    #[test]
    fn fix_wins_when_permitted() {
        let fix = LatLng::new(37.50, 127.03);
        let got = locate_or_default(&StaticProvider::with_fix(fix), &StaticPermissions::all());
        assert_eq!(got, fix);
    }

    #[test]
    fn no_fix_falls_back_to_city_hall() {
        let got = locate_or_default(&StaticProvider::empty(), &StaticPermissions::all());
        assert_eq!(got, CITY_HALL);
    }

    #[test]
    fn missing_permissions_force_the_fallback() {
        let fix = LatLng::new(37.50, 127.03);
        let got = locate_or_default(&StaticProvider::with_fix(fix), &StaticPermissions::none());
        assert_eq!(got, CITY_HALL);
    }

    #[test]
    fn one_missing_permission_is_enough_to_deny() {
        let partial = StaticPermissions::with(vec![Permission::CoarseLocation]);
        assert!(partial.granted(Permission::CoarseLocation));
        assert!(!partial.all_granted());

        let fix = LatLng::new(37.50, 127.03);
        let got = locate_or_default(&StaticProvider::with_fix(fix), &partial);
        assert_eq!(got, CITY_HALL);
    }
}
