use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::ResolvedCart;
use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::replace_all::{
    ReplaceAllParams, ReplaceAllUseCase, ReplaceItem,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use crate::api::cart::dto::{CartEnvelope, ReplaceCartRequest, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    replace_all_use_case: Arc<dyn ReplaceAllUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        replace_all_use_case: Arc<dyn ReplaceAllUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            add_product_use_case,
            remove_product_use_case,
            replace_all_use_case,
            update_quantity_use_case,
            clear_use_case,
        }
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "cart.invalid_id".to_string(),
    })
}

/// Shopping cart API
///
/// Responses wrap the resolved cart in `{ status, payload }`. Each line item
/// carries the current product record, or null if it has been deleted.
#[OpenApi]
impl CartApi {
    /// Create an empty cart
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Created(Json(CartEnvelope::success(cart))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart_by_id(&self, id: Path<String>) -> CartReadResponse {
        let Ok(cart_id) = Uuid::parse_str(&id.0) else {
            return CartReadResponse::BadRequest(invalid_id());
        };

        let result = self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id: cart_id })
            .await;
        cart_read_response(result)
    }

    /// Add a product to a cart
    ///
    /// Adding a product already in the cart increments its quantity by one.
    #[oai(
        path = "/carts/:id/product/:product_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_product(&self, id: Path<String>, product_id: Path<String>) -> CartWriteResponse {
        let Ok((cart_id, product_id)) = parse_pair(&id.0, &product_id.0) else {
            return CartWriteResponse::BadRequest(invalid_id());
        };

        match self
            .add_product_use_case
            .execute(AddProductParams {
                cart_id,
                product_id,
            })
            .await
        {
            Ok(cart) => CartWriteResponse::Created(Json(CartEnvelope::success(cart))),
            Err(err) => cart_write_error(err),
        }
    }

    /// Remove a product from a cart
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_product(&self, id: Path<String>, product_id: Path<String>) -> CartReadResponse {
        let Ok((cart_id, product_id)) = parse_pair(&id.0, &product_id.0) else {
            return CartReadResponse::BadRequest(invalid_id());
        };

        let result = self
            .remove_product_use_case
            .execute(RemoveProductParams {
                cart_id,
                product_id,
            })
            .await;
        cart_read_response(result)
    }

    /// Replace the whole item list
    ///
    /// Every referenced product must exist; otherwise nothing is written.
    #[oai(path = "/carts/:id", method = "put", tag = "ApiTags::Carts")]
    async fn replace_all(
        &self,
        id: Path<String>,
        body: Json<ReplaceCartRequest>,
    ) -> CartReadResponse {
        let Ok(cart_id) = Uuid::parse_str(&id.0) else {
            return CartReadResponse::BadRequest(invalid_id());
        };

        let mut items = Vec::with_capacity(body.0.products.len());
        for entry in body.0.products {
            let Ok(product_id) = Uuid::parse_str(&entry.product) else {
                return CartReadResponse::BadRequest(invalid_id());
            };
            items.push(ReplaceItem {
                product_id,
                quantity: entry.quantity,
            });
        }

        let result = self
            .replace_all_use_case
            .execute(ReplaceAllParams { cart_id, items })
            .await;
        cart_read_response(result)
    }

    /// Set the quantity of a line item
    #[oai(
        path = "/carts/:id/products/:product_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn update_quantity(
        &self,
        id: Path<String>,
        product_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> CartReadResponse {
        let Ok((cart_id, product_id)) = parse_pair(&id.0, &product_id.0) else {
            return CartReadResponse::BadRequest(invalid_id());
        };

        if body.0.quantity < 1 {
            return CartReadResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "cart.quantity_invalid".to_string(),
            }));
        }
        let quantity = u32::try_from(body.0.quantity).unwrap_or(u32::MAX);

        let result = self
            .update_quantity_use_case
            .execute(UpdateQuantityParams {
                cart_id,
                product_id,
                quantity,
            })
            .await;
        cart_read_response(result)
    }

    /// Empty a cart
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn clear_cart(&self, id: Path<String>) -> CartReadResponse {
        let Ok(cart_id) = Uuid::parse_str(&id.0) else {
            return CartReadResponse::BadRequest(invalid_id());
        };

        let result = self
            .clear_use_case
            .execute(ClearCartParams { cart_id })
            .await;
        cart_read_response(result)
    }
}

fn parse_pair(cart_id: &str, product_id: &str) -> Result<(Uuid, Uuid), uuid::Error> {
    Ok((Uuid::parse_str(cart_id)?, Uuid::parse_str(product_id)?))
}

fn cart_read_response(result: Result<ResolvedCart, CartError>) -> CartReadResponse {
    match result {
        Ok(cart) => CartReadResponse::Ok(Json(CartEnvelope::success(cart))),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                400 => CartReadResponse::BadRequest(json),
                404 => CartReadResponse::NotFound(json),
                _ => CartReadResponse::InternalError(json),
            }
        }
    }
}

fn cart_write_error(err: CartError) -> CartWriteResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => CartWriteResponse::BadRequest(json),
        404 => CartWriteResponse::NotFound(json),
        _ => CartWriteResponse::InternalError(json),
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartReadResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartWriteResponse {
    #[oai(status = 201)]
    Created(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
