//! REST API request/response models
//!
//! JSON DTOs for the gateway surface plus their mappings to the backend
//! proto messages. Kept mechanical: the dispatch layer only translates.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::clients::proto::{inventory, orders, products};

// ============================================================================
// Error Response
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Inventory Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StockItemDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: i32,
    pub minimum_stock: i32,
    pub price: f64,
}

impl From<inventory::StockItem> for StockItemDto {
    fn from(item: inventory::StockItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            sku: item.sku,
            quantity: item.quantity,
            minimum_stock: item.minimum_stock,
            price: item.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddStockItemBody {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub minimum_stock: i32,
    #[serde(default)]
    pub price: f64,
}

impl From<AddStockItemBody> for inventory::StockItem {
    fn from(body: AddStockItemBody) -> Self {
        Self {
            // id assigned by the backend
            id: String::new(),
            name: body.name,
            sku: body.sku,
            quantity: body.quantity,
            minimum_stock: body.minimum_stock,
            price: body.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockBody {
    pub amount: i32,
}

#[derive(Debug, Deserialize)]
pub struct SetMinimumStockBody {
    pub minimum_stock: i32,
}

// ============================================================================
// Products Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl From<products::Product> for ProductDto {
    fn from(product: products::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

impl From<CreateProductBody> for products::CreateProductRequest {
    fn from(body: CreateProductBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            category: body.category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

// ============================================================================
// Orders Models
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItemDto {
    pub product_id: String,
    pub quantity: i32,
    #[serde(default)]
    pub unit_price: f64,
}

impl From<orders::OrderItem> for OrderItemDto {
    fn from(item: orders::OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

impl From<OrderItemDto> for orders::OrderItem {
    fn from(item: OrderItemDto) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: String,
    pub client_id: String,
    pub status: String,
    pub items: Vec<OrderItemDto>,
    pub total: f64,
    pub created_at: String,
}

impl From<orders::Order> for OrderDto {
    fn from(order: orders::Order) -> Self {
        Self {
            id: order.id,
            client_id: order.client_id,
            status: order.status,
            items: order.items.into_iter().map(OrderItemDto::from).collect(),
            total: order.total,
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderListDto {
    pub orders: Vec<OrderDto>,
    pub total: i32,
}

impl From<orders::FindAllOrdersResponse> for OrderListDto {
    fn from(response: orders::FindAllOrdersResponse) -> Self {
        Self {
            orders: response.orders.into_iter().map(OrderDto::from).collect(),
            total: response.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    /// Defaults to the authenticated caller when omitted.
    #[serde(default)]
    pub client_id: Option<String>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusBody {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct CancelOrderBody {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<i32>,
    #[serde(default)]
    pub page_size: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub page: Option<i32>,
    #[serde(default)]
    pub page_size: Option<i32>,
}
