use common::error::CatalogFetchError;
use common::model::template::Template;

pub enum Msg {
    CatalogLoaded(Result<Vec<Template>, CatalogFetchError>),
    LoadMore,
    Select(Template),
    UpdateCaption(String),
    DragStart { client_x: f64, client_y: f64 },
    DragMove { client_x: f64, client_y: f64 },
    DragEnd { client_x: f64, client_y: f64 },
    DragCancel,
    Download,
    DismissNotice,
}
