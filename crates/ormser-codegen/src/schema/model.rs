use super::{ErrorSet, Field, ModelAttr, SelectedColumn, SerializerAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// Field selection for the derived serializer
    pub(crate) serializer: Option<SerializerAttr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(ast, "model fields must be named"));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node, &ast.ident) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let model = Self {
            ident: ast.ident.clone(),
            fields,
            table: model_attr.table,
            serializer: model_attr.serializer,
        };

        model.check_columns()?;
        model.check_serializer()?;

        Ok(model)
    }

    fn check_columns(&self) -> syn::Result<()> {
        let mut errs = ErrorSet::new();
        let mut seen = vec![];

        for field in &self.fields {
            let Some(name) = field.column_name() else {
                continue;
            };

            if seen.contains(&name) {
                let err = match &field.attrs.column {
                    Some(column) => syn::Error::new_spanned(
                        &column.name,
                        format!("duplicate column `{name}`"),
                    ),
                    None => {
                        syn::Error::new_spanned(&field.ident, format!("duplicate column `{name}`"))
                    }
                };
                errs.push(err);
            } else {
                seen.push(name);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    // Same order as the runtime check: overlap, then both selectors set,
    // then names that are not columns.
    fn check_serializer(&self) -> syn::Result<()> {
        let Some(attr) = &self.serializer else {
            return Ok(());
        };

        let mut errs = ErrorSet::new();

        // An empty exclude selects nothing to drop, the same as no exclude
        let exclude = attr.exclude.as_ref().filter(|columns| !columns.is_empty());

        if let (Some(include), Some(exclude)) = (&attr.include, exclude) {
            for column in exclude {
                if include.iter().any(|other| other.name == column.name) {
                    errs.push(syn::Error::new(
                        column.span,
                        format!(
                            "field `{}` set in include and exclude at the same time",
                            column.name
                        ),
                    ));
                }
            }

            if let Some(err) = errs.collect() {
                return Err(err);
            }

            return Err(syn::Error::new(
                attr.span,
                "both `include` and `exclude` are set; set only one or neither",
            ));
        }

        for column in attr.columns() {
            if let Err(err) = self.check_selected(column) {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_selected(&self, selected: &SelectedColumn) -> syn::Result<()> {
        let name = &selected.name;

        if self
            .fields
            .iter()
            .any(|field| field.column_name().as_ref() == Some(name))
        {
            return Ok(());
        }

        let message = match self.fields.iter().find(|field| field.app_name() == *name) {
            Some(field) => match field.column_name() {
                None => format!("`{name}` is a relation and has no column"),
                Some(column) => {
                    format!("field `{name}` is stored in column `{column}`; select it as `{column}`")
                }
            },
            None => format!("model `{}` has no column `{name}`", self.ident),
        };

        Err(syn::Error::new(selected.span, message))
    }
}
