//! Typed RPC method identifiers and the public-method allowlist.

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

/// Normalized identifier of an RPC entry point, e.g.
/// `/commerce.orders.v1.OrdersService/CreateOrder`.
///
/// Dispatch code refers to the constants in [`methods`]; the allowlist is
/// an exact-match set lookup over these, never a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodName(&'static str);

impl MethodName {
    pub const fn from_static(path: &'static str) -> Self {
        Self(path)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this method bypasses authentication entirely.
    pub fn is_public(&self) -> bool {
        PUBLIC_METHODS.contains(self)
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Every RPC entry point the gateway dispatches to.
pub mod methods {
    use super::MethodName;

    pub const HEALTH: MethodName = MethodName::from_static("/health");

    // Client service (registration and lookup are public by design).
    pub const CLIENTS_REGISTER: MethodName =
        MethodName::from_static("/commerce.clients.v1.ClientService/RegisterClient");
    pub const CLIENTS_GET: MethodName =
        MethodName::from_static("/commerce.clients.v1.ClientService/GetClient");

    // Auth service.
    pub const AUTH_LOGIN: MethodName =
        MethodName::from_static("/commerce.auth.v1.AuthService/Login");
    pub const AUTH_LOGOUT: MethodName =
        MethodName::from_static("/commerce.auth.v1.AuthService/Logout");
    pub const AUTH_VALIDATE: MethodName =
        MethodName::from_static("/commerce.auth.v1.AuthService/ValidateToken");

    // Inventory service.
    pub const INVENTORY_GET_ALL: MethodName =
        MethodName::from_static("/commerce.inventory.v1.InventoryService/GetAllProducts");
    pub const INVENTORY_GET_BY_ID: MethodName =
        MethodName::from_static("/commerce.inventory.v1.InventoryService/GetProductById");
    pub const INVENTORY_ADD: MethodName =
        MethodName::from_static("/commerce.inventory.v1.InventoryService/AddProduct");
    pub const INVENTORY_UPDATE_STOCK: MethodName =
        MethodName::from_static("/commerce.inventory.v1.InventoryService/UpdateStock");
    pub const INVENTORY_SET_MINIMUM_STOCK: MethodName =
        MethodName::from_static("/commerce.inventory.v1.InventoryService/SetMinimumStock");

    // Products service.
    pub const PRODUCTS_LIST: MethodName =
        MethodName::from_static("/commerce.products.v1.ProductsService/GetProducts");
    pub const PRODUCTS_GET: MethodName =
        MethodName::from_static("/commerce.products.v1.ProductsService/GetProduct");
    pub const PRODUCTS_CREATE: MethodName =
        MethodName::from_static("/commerce.products.v1.ProductsService/CreateProduct");
    pub const PRODUCTS_UPDATE: MethodName =
        MethodName::from_static("/commerce.products.v1.ProductsService/UpdateProduct");
    pub const PRODUCTS_DELETE: MethodName =
        MethodName::from_static("/commerce.products.v1.ProductsService/DeleteProduct");

    // Orders service.
    pub const ORDERS_CREATE: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/CreateOrder");
    pub const ORDERS_FIND_ALL: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/FindAllOrders");
    pub const ORDERS_FIND_ONE: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/FindOneOrder");
    pub const ORDERS_UPDATE_STATUS: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/UpdateOrderStatus");
    pub const ORDERS_CANCEL: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/CancelOrder");
    pub const ORDERS_CLIENT_HISTORY: MethodName =
        MethodName::from_static("/commerce.orders.v1.OrdersService/GetClientHistory");
}

/// Fixed allowlist of methods that proceed with no identity attached:
/// registration, client lookup, login and the health check.
static PUBLIC_METHODS: Lazy<HashSet<MethodName>> = Lazy::new(|| {
    [
        methods::CLIENTS_REGISTER,
        methods::CLIENTS_GET,
        methods::AUTH_LOGIN,
        methods::HEALTH,
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowlisted_methods_are_public() {
        assert!(methods::AUTH_LOGIN.is_public());
        assert!(methods::CLIENTS_REGISTER.is_public());
        assert!(methods::CLIENTS_GET.is_public());
        assert!(methods::HEALTH.is_public());
    }

    #[test]
    fn test_protected_methods_are_not_public() {
        assert!(!methods::ORDERS_CREATE.is_public());
        assert!(!methods::INVENTORY_GET_ALL.is_public());
        assert!(!methods::PRODUCTS_LIST.is_public());
        assert!(!methods::AUTH_LOGOUT.is_public());
    }

    #[test]
    fn test_match_is_exact() {
        // A differently-rendered path must not match the allowlist.
        let lookalike =
            MethodName::from_static("/commerce.auth.v1.AuthService/login");
        assert!(!lookalike.is_public());
    }
}
