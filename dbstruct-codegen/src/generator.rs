//! Rust struct generator.

use std::path::Path;

use dbstruct_core::{
    Emitter, File, GENERATED_HEADER, GenerateResult, Key, Options, OrmStyle, PreviewFile, Result,
    Table,
};
use tracing::{debug, warn};

use crate::{
    ast::{Field, ModelAttr, Module, SeaOrmAttr, Struct},
    imports::ImportCollector,
    model::{DeclField, Declaration, build_declarations},
    rust_file::RustFile,
    type_mapper::RustTypeMapper,
};

/// Emits one Rust struct per declaration.
pub struct Generator {
    declarations: Vec<Declaration>,
    package: String,
    single_file: bool,
    orm: Option<OrmStyle>,
    serde: bool,
    mapper: RustTypeMapper,
}

impl Generator {
    pub fn new(options: &Options, tables: &[Table]) -> Self {
        Self {
            declarations: build_declarations(tables),
            package: options.package.clone(),
            single_file: options.single_file,
            orm: options.orm_tag.then_some(options.orm_style),
            serde: options.serde_tag,
            mapper: RustTypeMapper,
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn files(&self) -> Vec<PreviewFile> {
        if self.single_file {
            vec![self.single_file_output()]
        } else {
            self.multi_file_output()
        }
    }

    fn sea_orm(&self) -> bool {
        self.orm == Some(OrmStyle::SeaOrm)
    }

    fn single_file_output(&self) -> PreviewFile {
        let file = if self.sea_orm() {
            self.declarations.iter().fold(RustFile::new(), |file, decl| {
                file.add(Module::new(&decl.module, self.entity_file(decl)))
            })
        } else {
            let mut imports = ImportCollector::new();
            let structs: Vec<Struct> = self
                .declarations
                .iter()
                .map(|decl| self.render_struct(decl, &decl.type_name, &mut imports))
                .collect();
            structs
                .into_iter()
                .fold(RustFile::new().imports(imports), RustFile::add)
        };

        PreviewFile {
            path: format!("{}.rs", self.package),
            content: file.render_with_header(GENERATED_HEADER),
        }
    }

    fn multi_file_output(&self) -> Vec<PreviewFile> {
        let mut files: Vec<PreviewFile> = self
            .declarations
            .iter()
            .map(|decl| {
                let file = if self.sea_orm() {
                    self.entity_file(decl)
                } else {
                    let mut imports = ImportCollector::new();
                    let item = self.render_struct(decl, &decl.type_name, &mut imports);
                    RustFile::new().imports(imports).add(item)
                };
                PreviewFile {
                    path: format!("{}/{}.rs", self.package, decl.file_stem()),
                    content: file.render_with_header(GENERATED_HEADER),
                }
            })
            .collect();

        let mut mod_file = RustFile::new();
        if self.sea_orm() && !self.declarations.is_empty() {
            mod_file = mod_file.lines(
                self.declarations
                    .iter()
                    .map(|decl| format!("pub mod {};", decl.module)),
            );
        } else if !self.declarations.is_empty() {
            mod_file = mod_file
                .lines(
                    self.declarations
                        .iter()
                        .map(|decl| format!("mod {};", decl.module)),
                )
                .lines(
                    self.declarations
                        .iter()
                        .map(|decl| format!("pub use {}::{};", decl.module, decl.type_name)),
                );
        }
        files.push(PreviewFile {
            path: format!("{}/mod.rs", self.package),
            content: mod_file.render_with_header(GENERATED_HEADER),
        });

        files
    }

    /// A sea-orm entity module: `Model`, `Relation` and the active model hook.
    ///
    /// Tables without a primary key cannot be entities and get a
    /// `FromQueryResult` model instead.
    fn entity_file(&self, decl: &Declaration) -> RustFile {
        let mut imports = ImportCollector::new();
        let entity = decl.has_primary_key();
        if entity {
            imports.add("sea_orm::entity::prelude", "*");
        } else {
            warn!(
                table = %decl.table,
                "table has no primary key, generating a query result model"
            );
            imports.add("sea_orm", "FromQueryResult");
        }

        let model = self.render_struct(decl, "Model", &mut imports);
        let file = RustFile::new().imports(imports).add(model);
        if !entity {
            return file;
        }
        file.lines(vec![
            "#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]".to_string(),
            "pub enum Relation {}".to_string(),
        ])
        .lines(vec!["impl ActiveModelBehavior for ActiveModel {}".to_string()])
    }

    fn render_struct(
        &self,
        decl: &Declaration,
        name: &str,
        imports: &mut ImportCollector,
    ) -> Struct {
        let mut item = Struct::new(name)
            .doc(decl.doc())
            .derive("Debug")
            .derive("Clone");

        if self.serde {
            imports.add("serde", "Deserialize");
            imports.add("serde", "Serialize");
            item = item.derive("Serialize").derive("Deserialize");
        }

        let entity = decl.has_primary_key();
        match self.orm {
            Some(OrmStyle::Sqlx) => {
                item = item.derive("sqlx::FromRow");
            }
            Some(OrmStyle::SeaOrm) if entity => {
                item = item
                    .derive("PartialEq")
                    .derive("DeriveEntityModel")
                    .attr(ModelAttr::sea_orm(SeaOrmAttr::table(&decl.table)));
            }
            Some(OrmStyle::SeaOrm) => {
                item = item.derive("PartialEq").derive("FromQueryResult");
            }
            None => {}
        }

        decl.fields.iter().fold(item, |item, field| {
            item.field(self.render_field(field, entity, imports))
        })
    }

    fn render_field(
        &self,
        field: &DeclField,
        entity: bool,
        imports: &mut ImportCollector,
    ) -> Field {
        self.mapper.add_imports(field.semantic, imports);
        let ty = self.mapper.map_column(field.semantic, field.nullable);
        let mut out = Field::new(&field.ident, ty);

        if let Some(doc) = self.field_doc(field) {
            out = out.doc(doc);
        }

        match self.orm {
            Some(OrmStyle::Sqlx) => {
                out = out.attr(ModelAttr::sqlx_rename(&field.column));
            }
            Some(OrmStyle::SeaOrm) if entity => {
                let mut attr = SeaOrmAttr::column(&field.column);
                match field.key {
                    Key::Primary if field.auto_increment => attr = attr.primary_key(),
                    Key::Primary => attr = attr.primary_key().auto_increment(false),
                    Key::Unique => attr = attr.unique(),
                    Key::Index => attr = attr.indexed(),
                    Key::None => {}
                }
                if field.nullable {
                    attr = attr.nullable();
                }
                out = out.attr(ModelAttr::sea_orm(attr));
            }
            Some(OrmStyle::SeaOrm) | None => {}
        }

        if self.serde {
            out = out.attr(ModelAttr::serde_rename(&field.wire_name));
        }

        out
    }

    /// Column comment, plus the column type and key for sqlx-style output.
    fn field_doc(&self, field: &DeclField) -> Option<String> {
        let mut lines = Vec::new();
        if let Some(comment) = &field.comment {
            lines.push(comment.clone());
        }
        if self.orm == Some(OrmStyle::Sqlx) {
            let mut meta = format!("`{}`", field.native_type);
            if field.key != Key::None {
                meta.push_str(&format!(", {}", key_label(field.key)));
            }
            if field.nullable {
                meta.push_str(", nullable");
            }
            lines.push(meta);
        }
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

fn key_label(key: Key) -> &'static str {
    match key {
        Key::Primary => "primary key",
        Key::Unique => "unique",
        Key::Index => "indexed",
        Key::None => "",
    }
}

impl Emitter for Generator {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for preview in self.files() {
            let path = output_dir.join(&preview.path);
            let written = File::new(&path, preview.content).write()?;
            debug!(path = %path.display(), ?written, "generated file");
            result.record(path, written);
        }
        Ok(result)
    }
}
