//! Static route table and the role-filtered navigation menu

use super::roles::Role;

pub mod paths {
    pub const AUTH: &str = "/auth";
    pub const HOME: &str = "/";
    pub const PRODUCTS: &str = "/products";
    pub const INVENTORY: &str = "/inventory";
    pub const PURCHASE: &str = "/purchase";
    pub const SALES: &str = "/sales";
    pub const SUPPLIERS: &str = "/suppliers";
    pub const ROLES: &str = "/roles";
    pub const ADMIN: &str = "/admin";
}

/// Minimum role for an entry to be visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Everyone,
    AdminOrManager,
    ManagerOnly,
}

impl RouteAccess {
    pub fn allows(self, role: Role) -> bool {
        match self {
            RouteAccess::Everyone => true,
            RouteAccess::AdminOrManager => role.is_admin_or_manager(),
            RouteAccess::ManagerOnly => role == Role::Manager,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub access: RouteAccess,
}

/// Every navigable screen, in menu order
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: paths::HOME,
        label: "首页",
        icon: "home",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::PRODUCTS,
        label: "商品管理",
        icon: "package",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::INVENTORY,
        label: "库存管理",
        icon: "bar-chart",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::PURCHASE,
        label: "采购管理",
        icon: "shopping-cart",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::SALES,
        label: "销售管理",
        icon: "trending-up",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::SUPPLIERS,
        label: "供应商",
        icon: "users",
        access: RouteAccess::Everyone,
    },
    RouteDescriptor {
        path: paths::ROLES,
        label: "角色管理",
        icon: "settings",
        access: RouteAccess::AdminOrManager,
    },
    RouteDescriptor {
        path: paths::ADMIN,
        label: "管理面板",
        icon: "shield",
        access: RouteAccess::ManagerOnly,
    },
];

/// Visible menu for `role`: the unconditional entries in declaration order,
/// then the role-gated entries the role satisfies, also in declaration order.
pub fn compose_navigation(descriptors: &[RouteDescriptor], role: Role) -> Vec<&RouteDescriptor> {
    let base = descriptors
        .iter()
        .filter(|d| d.access == RouteAccess::Everyone);
    let gated = descriptors
        .iter()
        .filter(|d| d.access != RouteAccess::Everyone && d.access.allows(role));
    base.chain(gated).collect()
}

pub fn descriptor_for(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|d| d.path == path)
}

/// Menu highlight: exact path match only
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_for(role: Role) -> Vec<&'static str> {
        compose_navigation(ROUTES, role).iter().map(|d| d.path).collect()
    }

    const BASE: [&str; 6] = [
        paths::HOME,
        paths::PRODUCTS,
        paths::INVENTORY,
        paths::PURCHASE,
        paths::SALES,
        paths::SUPPLIERS,
    ];

    #[test]
    fn test_unassigned_sees_base_set_exactly() {
        assert_eq!(paths_for(Role::Unassigned), BASE.to_vec());
    }

    #[test]
    fn test_roles_entry_hidden_from_non_admin_roles() {
        for role in [Role::Purchaser, Role::Unassigned] {
            assert!(!paths_for(role).contains(&paths::ROLES));
            assert!(!paths_for(role).contains(&paths::ADMIN));
        }
    }

    #[test]
    fn test_admin_gets_roles_only() {
        let mut expected = BASE.to_vec();
        expected.push(paths::ROLES);
        assert_eq!(paths_for(Role::Admin), expected);
    }

    #[test]
    fn test_manager_gets_roles_and_admin_appended() {
        let mut expected = BASE.to_vec();
        expected.push(paths::ROLES);
        expected.push(paths::ADMIN);
        assert_eq!(paths_for(Role::Manager), expected);
    }

    #[test]
    fn test_gated_entries_follow_base_regardless_of_declaration() {
        let shuffled = [ROUTES[7], ROUTES[0], ROUTES[6], ROUTES[1]];
        let visible: Vec<&str> = compose_navigation(&shuffled, Role::Manager)
            .iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(visible, vec![paths::HOME, paths::PRODUCTS, paths::ADMIN, paths::ROLES]);
    }

    #[test]
    fn test_lookup_and_active() {
        assert_eq!(descriptor_for("/suppliers").map(|d| d.label), Some("供应商"));
        assert!(descriptor_for("/nowhere").is_none());
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/products"));
    }
}
