//! Script-expression dispatch for tabular test fixtures.
//!
//! Individual field values of a row-oriented fixture can be script
//! expressions instead of literals, evaluated lazily when a test reads the
//! fixture. A field is recognized as a script by a configurable **prefix**;
//! everything after the prefix is handed to the scripting engine registered
//! for that prefix's language. Values without a prefix - and all non-string
//! values - pass through untouched, so a dispatch-wrapped table is
//! indistinguishable from a plain one except by the evaluated values.
//!
//! A fixture using such fields could look like this (any tabular format
//! works; the parser is not this crate's concern):
//!
//! ```text
//! location | num          | addr                              | date
//!          | jruby:12/2   | jruby:'Webster Street'.reverse    | jruby:DateTime::now() - 14
//! ```
//!
//! # Core Concepts
//!
//! - [`ScriptConfig`]: Configures one scripting language: its name as known
//! 	to the host, the prefix marking fields in that language, and custom
//! 	invocation handlers. A dataset can carry several configurations at once.
//!
//! - [`ScriptEngine`] / [`ScriptHost`]: The engine is an opaque
//! 	`evaluate( text ) -> value` service implemented by an adapter per
//! 	interpreter; the host resolves engines by language name.
//! 	[`EngineRegistry`] is the provided explicit registration table.
//!
//! - [`ScriptHandler`]: A pre/post processor wrapping every evaluation -
//! 	add common imports before, convert result objects after. Built-in
//! 	handlers apply to every script of a language and are published once per
//! 	process through the [`HandlerRegistry`]; custom handlers are supplied
//! 	per configuration.
//!
//! - [`ScriptTable`]: Wraps one [`Table`]. On each cell read it detects a
//! 	script prefix, runs the handler chain around the engine evaluation, and
//! 	returns the post-processed result.
//!
//! - [`ScriptDataSet`]: Wraps a whole [`DataSet`], yielding a fresh
//! 	[`ScriptTable`] per table with one shared configuration list. Pure
//! 	composition; supports forward and reverse iteration.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible ;
//! use script_table::{
//! 	EngineRegistry, ScriptConfig, ScriptEngine, ScriptError, ScriptTable,
//! 	Table, TableMetadata, Value,
//! };
//!
//! // A minimal in-memory table. Real deployments implement `Table` for
//! // whatever their fixture parser produces.
//! struct Fixture { metadata: TableMetadata, rows: Vec<Vec<Value>> }
//!
//! impl Table for Fixture {
//! 	type Error = Infallible ;
//!
//! 	fn row_count( &self ) -> usize { self.rows.len() }
//! 	fn metadata( &self ) -> &TableMetadata { &self.metadata }
//! 	fn value( &self, row: usize, column: &str ) -> Result<Value, Infallible> {
//! 		let index = self.metadata.columns().iter()
//! 			.position(| name | name == column )
//! 			.expect( "unknown column" );
//! 		Ok( self.rows[ row ][ index ].clone() )
//! 	}
//! }
//!
//! // An engine adapter. This one only knows how to halve integers; real
//! // adapters delegate to an embedded or external interpreter.
//! struct Halver ;
//!
//! impl ScriptEngine for Halver {
//! 	fn language( &self ) -> &str { "halver" }
//! 	fn evaluate( &mut self, script: &str ) -> Result<Value, ScriptError> {
//! 		let n: i64 = script.trim().parse()?;
//! 		Ok( Value::from( n / 2 ))
//! 	}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fixture = Fixture {
//! 	metadata: TableMetadata::new( "location", [ "num", "addr" ] ),
//! 	rows: vec![ vec![ Value::from( "halver:12" ), Value::from( "Webster Street" ) ]],
//! };
//!
//! let mut host = EngineRegistry::new();
//! host.register( Halver );
//!
//! let config = ScriptConfig::new( "halver", "halver:" )?;
//! let table = ScriptTable::new( fixture, [ &config ], &host )?;
//!
//! // The prefixed field is evaluated on read; the plain one passes through.
//! assert_eq!( table.value( 0, "num" )?, Value::from( 6 ));
//! assert_eq!( table.value( 0, "addr" )?, Value::from( "Webster Street" ));
//! # Ok(())
//! # }
//! ```
//!
//! # Built-in Handlers
//!
//! Built-ins run for every script of their language, independent of which
//! dataset is being read. They are discovered once per process from a
//! [`BuiltinDiscovery`] source and published with an explicit install call,
//! before the first dispatch table is constructed:
//!
//! ```
//! use script_table::{ HandlerRegistry, ScriptHandler, StaticDiscovery };
//!
//! struct DateImports ;
//!
//! impl ScriptHandler for DateImports {
//! 	fn language( &self ) -> &str { "jruby" }
//! 	fn pre_invoke( &self, script: String ) -> String {
//! 		format!( "require 'date'; {}", script )
//! 	}
//! }
//!
//! HandlerRegistry::discover( StaticDiscovery::new().with(|| DateImports )).install();
//! ```
//!
//! A failing discovery source degrades the registry to empty with a warning:
//! dispatch keeps working with custom handlers only. Re-installation is a
//! logged no-op.
//!
//! # Evaluation Order
//!
//! For one script field, the merged handler list is the built-ins for the
//! language (registry order) followed by the configuration's custom handlers
//! (configuration order). `pre_invoke` runs through that list front to back,
//! each handler transforming the previous output; `post_invoke` runs back to
//! front, so the handler whose pre-invoke ran last is the first to see the
//! result - wrap/unwrap semantics.
//!
//! Prefixes need not be mutually exclusive. A value is checked against every
//! configured prefix in registration order, and every matching prefix's
//! pipeline runs in turn against the progressively updated value.
//!
//! # Concurrency
//!
//! The reference execution model is single-threaded call-and-return. Engine
//! handles serialize access through a mutex, so concurrent fixture loading
//! degrades to one evaluation per engine at a time rather than corrupting a
//! non-reentrant interpreter. No timeouts are imposed: a hanging script
//! hangs the caller.
//!
//! # Errors
//!
//! Errors are typed by kind so callers can branch without inspecting
//! messages: [`ConfigError`] for anything wrong before rows are read (empty
//! prefix, no configurations, no engine for a declared language),
//! [`ReadError`] for cell reads (source passthrough, or script failure with
//! row, column, and script text), [`DataSetError`] for dataset iteration.
//! Script failures are never swallowed or turned into default values.

mod binding ;
mod config ;
mod dataset ;
mod engine ;
mod handler ;
mod registry ;
mod table ;

#[doc( no_inline )]
pub use serde_json::Value ;

pub use config::{ ConfigError, ScriptConfig };
pub use dataset::{ DataSet, DataSetError, ScriptDataSet, ScriptTables };
pub use engine::{ EngineError, EngineHandle, EngineRegistry, ScriptEngine, ScriptError, ScriptHost };
pub use handler::{ HandlerFactory, ScriptHandler };
pub use registry::{ BuiltinDiscovery, HandlerRegistry, StaticDiscovery };
pub use table::{ ReadError, ScriptTable, Table, TableMetadata };
