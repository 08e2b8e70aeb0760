//! Template sources for the generated Go files
//!
//! One constant per output file. Templates are Handlebars with escaping
//! disabled; the context is built by `scaffold::generator`.

/// Rewritten configuration document (the session's single config write).
pub const GENERATOR_JSON: &str = "{{generatorJson}}";

/// Top-level application file registering routes for every entity.
pub const APP_GO: &str = r#"package main

import (
	"net/http"

{{#each entities}}
	{{nameLower}}web "{{../packageName}}/web/{{name}}"
{{/each}}
)

func init() {
{{#each entities}}
	http.HandleFunc("/{{routePath}}", {{nameLower}}web.{{name}}Handler)
	http.HandleFunc("/{{routePath}}/", {{nameLower}}web.{{name}}Handler)
{{/each}}
}
"#;

/// Persisted data model struct.
pub const DATA_MODEL: &str = r#"package {{nameLower}}

{{#if hasDate}}
import "time"
{{/if}}

// {{name}} is the persisted form of the {{name}} entity.
type {{name}} struct {
	Id int64 `json:"id" datastore:"-"`
{{#each attrs}}
	{{fieldName}} {{goType}} `json:"{{attrName}}"`
{{/each}}
}
"#;

/// Data-access interface.
pub const DATA_MANAGER: &str = r#"package {{nameLower}}

// {{name}}DataManager abstracts persistence for {{name}} entities.
type {{name}}DataManager interface {
	Get{{name}}(id int64) (*{{name}}, error)
	GetAll{{namePlural}}() ([]{{name}}, error)
	Save{{name}}(e *{{name}}) error
	Delete{{name}}(id int64) error
}
"#;

/// Factory yielding the platform data manager.
pub const DATA_MANAGER_FACTORY: &str = r#"package {{nameLower}}

import "appengine"

// {{name}}DataManagerFactory builds the platform data manager for {{name}}.
type {{name}}DataManagerFactory struct{}

func (f {{name}}DataManagerFactory) Create{{name}}DataManager(ctx appengine.Context) {{name}}DataManager {
	return &AppEngine{{name}}DataManager{Ctx: ctx}
}
"#;

/// App Engine datastore implementation of the data manager.
pub const APP_ENGINE_DATA_MANAGER: &str = r#"package {{nameLower}}

import (
	"appengine"
	"appengine/datastore"
)

// AppEngine{{name}}DataManager persists {{name}} entities in the App
// Engine datastore.
type AppEngine{{name}}DataManager struct {
	Ctx appengine.Context
}

func (m *AppEngine{{name}}DataManager) Get{{name}}(id int64) (*{{name}}, error) {
	key := datastore.NewKey(m.Ctx, "{{name}}", "", id, nil)
	e := new({{name}})
	if err := datastore.Get(m.Ctx, key, e); err != nil {
		return nil, err
	}
	e.Id = id
	return e, nil
}

func (m *AppEngine{{name}}DataManager) GetAll{{namePlural}}() ([]{{name}}, error) {
	q := datastore.NewQuery("{{name}}")
	var out []{{name}}
	keys, err := q.GetAll(m.Ctx, &out)
	if err != nil {
		return nil, err
	}
	for i, key := range keys {
		out[i].Id = key.IntID()
	}
	return out, nil
}

func (m *AppEngine{{name}}DataManager) Save{{name}}(e *{{name}}) error {
	key := datastore.NewIncompleteKey(m.Ctx, "{{name}}", nil)
	if e.Id != 0 {
		key = datastore.NewKey(m.Ctx, "{{name}}", "", e.Id, nil)
	}
	stored, err := datastore.Put(m.Ctx, key, e)
	if err != nil {
		return err
	}
	e.Id = stored.IntID()
	return nil
}

func (m *AppEngine{{name}}DataManager) Delete{{name}}(id int64) error {
	key := datastore.NewKey(m.Ctx, "{{name}}", "", id, nil)
	return datastore.Delete(m.Ctx, key)
}
"#;

/// Domain layer: constraint validation in front of the data manager.
pub const DOMAIN_MGR: &str = r#"package {{nameLower}}

import (
{{#if needsErrors}}
	"errors"
{{/if}}
{{#if needsFmt}}
	"fmt"
{{/if}}
{{#if needsTime}}
	"time"
{{/if}}

	data "{{packageName}}/data/{{name}}"
)

// {{name}}DomainMgr enforces the declared attribute constraints before
// delegating persistence to the data layer.
type {{name}}DomainMgr struct {
	DataMgr data.{{name}}DataManager
}

// Validate checks e against the constraints declared for {{name}}.
func (m *{{name}}DomainMgr) Validate(e *data.{{name}}) error {
{{#each attrs}}
{{#if isString}}
{{#if required}}
	if e.{{fieldName}} == "" {
		return errors.New("{{attrName}} is required")
	}
{{/if}}
{{#if hasMinLength}}
	if len(e.{{fieldName}}) < {{minLength}} {
		return fmt.Errorf("{{attrName}} must be at least {{minLength}} characters")
	}
{{/if}}
{{#if hasMaxLength}}
	if len(e.{{fieldName}}) > {{maxLength}} {
		return fmt.Errorf("{{attrName}} must be at most {{maxLength}} characters")
	}
{{/if}}
{{/if}}
{{#if isNumeric}}
{{#if hasMin}}
	if e.{{fieldName}} < {{minLiteral}} {
		return fmt.Errorf("{{attrName}} must be at least {{minLiteral}}")
	}
{{/if}}
{{#if hasMax}}
	if e.{{fieldName}} > {{maxLiteral}} {
		return fmt.Errorf("{{attrName}} must be at most {{maxLiteral}}")
	}
{{/if}}
{{/if}}
{{#if pastOnly}}
	if e.{{fieldName}}.After(time.Now()) {
		return errors.New("{{attrName}} must be in the past")
	}
{{/if}}
{{#if futureOnly}}
	if e.{{fieldName}}.Before(time.Now()) {
		return errors.New("{{attrName}} must be in the future")
	}
{{/if}}
{{#if isEnum}}
{{#if required}}
	if e.{{fieldName}} == "" {
		return errors.New("{{attrName}} is required")
	}
{{/if}}
{{#if hasEnumValues}}
	switch e.{{fieldName}} {
	case {{enumCaseList}}:
	default:
		return errors.New("{{attrName}} must be one of: {{enumValuesJoined}}")
	}
{{/if}}
{{/if}}
{{/each}}
	return nil
}

// Save validates e and hands it to the data manager.
func (m *{{name}}DomainMgr) Save{{name}}(e *data.{{name}}) error {
	if err := m.Validate(e); err != nil {
		return err
	}
	return m.DataMgr.Save{{name}}(e)
}

func (m *{{name}}DomainMgr) Get{{name}}(id int64) (*data.{{name}}, error) {
	return m.DataMgr.Get{{name}}(id)
}

func (m *{{name}}DomainMgr) GetAll{{namePlural}}() ([]data.{{name}}, error) {
	return m.DataMgr.GetAll{{namePlural}}()
}

func (m *{{name}}DomainMgr) Delete{{name}}(id int64) error {
	return m.DataMgr.Delete{{name}}(id)
}
"#;

/// REST resource over the domain layer.
pub const RESOURCE: &str = r#"package {{nameLower}}

import (
	"encoding/json"
	"net/http"
	"strconv"
	"strings"

	"appengine"

	data "{{packageName}}/data/{{name}}"
	domain "{{packageName}}/domain/{{name}}"
)

// {{name}}Resource exposes {{name}} entities at /{{routePath}}.
type {{name}}Resource struct{}

func (res *{{name}}Resource) manager(r *http.Request) *domain.{{name}}DomainMgr {
	ctx := appengine.NewContext(r)
	factory := data.{{name}}DataManagerFactory{}
	return &domain.{{name}}DomainMgr{DataMgr: factory.Create{{name}}DataManager(ctx)}
}

func (res *{{name}}Resource) pathId(r *http.Request) (int64, bool) {
	parts := strings.Split(strings.Trim(r.URL.Path, "/"), "/")
	id, err := strconv.ParseInt(parts[len(parts)-1], 10, 64)
	if err != nil {
		return 0, false
	}
	return id, true
}

func (res *{{name}}Resource) Get(w http.ResponseWriter, r *http.Request) {
	mgr := res.manager(r)
	if id, ok := res.pathId(r); ok {
		e, err := mgr.Get{{name}}(id)
		if err != nil {
			http.Error(w, err.Error(), http.StatusNotFound)
			return
		}
		json.NewEncoder(w).Encode(e)
		return
	}
	all, err := mgr.GetAll{{namePlural}}()
	if err != nil {
		http.Error(w, err.Error(), http.StatusInternalServerError)
		return
	}
	json.NewEncoder(w).Encode(all)
}

func (res *{{name}}Resource) Post(w http.ResponseWriter, r *http.Request) {
	mgr := res.manager(r)
	e := new(data.{{name}})
	if err := json.NewDecoder(r.Body).Decode(e); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		return
	}
	if err := mgr.Save{{name}}(e); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		return
	}
	w.WriteHeader(http.StatusCreated)
	json.NewEncoder(w).Encode(e)
}

func (res *{{name}}Resource) Put(w http.ResponseWriter, r *http.Request) {
	mgr := res.manager(r)
	id, ok := res.pathId(r)
	if !ok {
		http.Error(w, "missing id", http.StatusBadRequest)
		return
	}
	e := new(data.{{name}})
	if err := json.NewDecoder(r.Body).Decode(e); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		return
	}
	e.Id = id
	if err := mgr.Save{{name}}(e); err != nil {
		http.Error(w, err.Error(), http.StatusBadRequest)
		return
	}
	json.NewEncoder(w).Encode(e)
}

func (res *{{name}}Resource) Delete(w http.ResponseWriter, r *http.Request) {
	mgr := res.manager(r)
	id, ok := res.pathId(r)
	if !ok {
		http.Error(w, "missing id", http.StatusBadRequest)
		return
	}
	if err := mgr.Delete{{name}}(id); err != nil {
		http.Error(w, err.Error(), http.StatusInternalServerError)
		return
	}
	w.WriteHeader(http.StatusNoContent)
}
"#;

/// HTTP handler dispatching by method to the resource.
pub const HANDLER: &str = r#"package {{nameLower}}

import "net/http"

// {{name}}Handler routes /{{routePath}} requests to the resource.
func {{name}}Handler(w http.ResponseWriter, r *http.Request) {
	res := new({{name}}Resource)
	switch r.Method {
	case "GET":
		res.Get(w, r)
	case "POST":
		res.Post(w, r)
	case "PUT":
		res.Put(w, r)
	case "DELETE":
		res.Delete(w, r)
	default:
		http.Error(w, "method not allowed", http.StatusMethodNotAllowed)
	}
}
"#;

/// Every template, keyed by registry name.
pub const ALL: [(&str, &str); 9] = [
    ("generator_json", GENERATOR_JSON),
    ("app", APP_GO),
    ("data_model", DATA_MODEL),
    ("data_manager", DATA_MANAGER),
    ("data_manager_factory", DATA_MANAGER_FACTORY),
    ("appengine_data_manager", APP_ENGINE_DATA_MANAGER),
    ("domain_mgr", DOMAIN_MGR),
    ("resource", RESOURCE),
    ("handler", HANDLER),
];
