use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI document for the primary resources (inventory and work orders);
/// the reference catalogs are intentionally left undocumented here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Turbo Service API",
        version = "0.3.0",
        description = r#"
Backend for turbocharger workshop management.

- **Inventory**: parts, part types, suppliers and stock movements
- **Clients & vehicles**: customer registry with vehicle links
- **Work orders**: intake, parts selection, pricing and an eight-stage
  workflow (RECEIVED → IN_PROGRESS → QUOTED → ACCEPTED/REJECTED →
  WORKING → READY → DELIVERED) with guarded transitions

Error responses carry both `message` and a legacy-compatible `detail`
field with the same human-readable text.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    paths(
        crate::handlers::parts::create_part,
        crate::handlers::parts::list_parts,
        crate::handlers::parts::update_part,
        crate::handlers::parts::delete_part,
        crate::handlers::stock_movements::record_movement,
        crate::handlers::stock_movements::list_movements,
        crate::handlers::work_orders::create_work_order,
        crate::handlers::work_orders::list_work_orders,
        crate::handlers::work_orders::get_work_order,
        crate::handlers::work_orders::update_work_order,
        crate::handlers::work_orders::update_work_order_status,
        crate::handlers::settings::get_branding,
        crate::handlers::settings::put_branding,
        crate::handlers::seed::initialize_data,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::domain::status::WorkStatus,
        crate::entities::stock_movement::MovementType,
        crate::services::parts::CreatePartInput,
        crate::services::parts::UpdatePartInput,
        crate::services::parts::PartWithDetails,
        crate::services::stock_movements::RecordMovementInput,
        crate::services::work_orders::CreateWorkOrderInput,
        crate::services::work_orders::UpdateWorkOrderInput,
        crate::services::work_orders::WorkOrderSummary,
        crate::handlers::work_orders::StatusChangeRequest,
        crate::services::branding::BrandingConfig,
        crate::services::seed::SeedReport,
    )),
    tags(
        (name = "parts", description = "Spare part inventory"),
        (name = "stock-movements", description = "Stock adjustments"),
        (name = "work-orders", description = "Repair work orders"),
        (name = "settings", description = "Branding configuration"),
        (name = "system", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("document should serialize");
        assert!(json.contains("/api/work-orders"));
        assert!(json.contains("/api/parts"));
    }
}
