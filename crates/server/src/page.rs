//! Browser shell for the dashboard. The script renders the component tree from
//! `/api/layout`, and on every control change posts one `/api/update` per
//! callback listening to that control. Responses that arrive after a newer
//! request for the same output are dropped.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:24px;color:#222}
select{width:100%;padding:6px;font-size:14px}
.slider{display:flex;gap:12px;align-items:center}
.slider input{flex:1}
.slider output{min-width:140px;text-align:right;font-variant-numeric:tabular-nums}
.error{color:#b00020;padding:8px 0}
.error:empty{display:none}
</style>
</head>
<body>
<div id="app"></div>
<script>
const values = {};
const seq = {};
let callbacks = [];

async function fetchJson(url, init) {
  const res = await fetch(url, init);
  const body = await res.json();
  if (!res.ok) throw new Error(body.message || res.statusText);
  return body;
}

function emit(id, value) {
  values[id] = value;
  for (const cb of callbacks) {
    if (cb.inputs.some(dep => dep.id === id)) refresh(cb);
  }
}

function el(tag, attrs, children) {
  const node = document.createElement(tag);
  Object.assign(node, attrs || {});
  for (const child of children || []) node.appendChild(child);
  return node;
}

function render(node) {
  switch (node.type) {
    case 'div':
      return el('div', {}, node.children.map(render));
    case 'heading': {
      const h = el('h1', { textContent: node.text });
      h.style.textAlign = node.style.textAlign;
      h.style.color = node.style.color;
      h.style.fontSize = node.style['font-size'] + 'px';
      return h;
    }
    case 'paragraph':
      return el('p', { textContent: node.text });
    case 'line_break':
      return el('br');
    case 'dropdown': {
      values[node.id] = node.value;
      const select = el('select', { id: node.id, title: node.placeholder },
        node.options.map(o => el('option', { value: o.value, textContent: o.label })));
      select.value = node.value;
      select.addEventListener('change', () => emit(node.id, select.value));
      return select;
    }
    case 'range_slider': {
      values[node.id] = node.value.slice();
      const bound = i => el('input', {
        type: 'range', min: node.min, max: node.max, step: node.step, value: node.value[i]
      });
      const lo = bound(0);
      const hi = bound(1);
      const label = el('output');
      const show = ([a, b]) => { label.textContent = a + ' – ' + b + ' kg'; };
      show(values[node.id]);
      const onInput = () => {
        const a = Number(lo.value);
        const b = Number(hi.value);
        const range = a <= b ? [a, b] : [b, a];
        show(range);
        emit(node.id, range);
      };
      lo.addEventListener('change', onInput);
      hi.addEventListener('change', onInput);
      return el('div', { id: node.id, className: 'slider' }, [lo, hi, label]);
    }
    case 'graph':
      // The plot div belongs to Plotly; errors go to the sibling.
      return el('div', {}, [
        el('div', { id: node.id }),
        el('div', { id: node.id + '-error', className: 'error' })
      ]);
    default:
      return el('div', { textContent: 'unsupported component: ' + node.type });
  }
}

async function refresh(cb) {
  const key = cb.output.id;
  const mine = (seq[key] || 0) + 1;
  seq[key] = mine;
  const inputs = cb.inputs.map(dep => ({ id: dep.id, property: dep.property, value: values[dep.id] }));
  const target = document.getElementById(key);
  const status = document.getElementById(key + '-error');
  try {
    const res = await fetchJson('/api/update', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify({ output: cb.output, inputs })
    });
    if (seq[key] !== mine) return;
    status.textContent = '';
    Plotly.react(target, res.figure.data, res.figure.layout);
  } catch (err) {
    if (seq[key] !== mine) return;
    Plotly.purge(target);
    status.textContent = err.message;
  }
}

async function boot() {
  const app = document.getElementById('app');
  try {
    const [layout, specs] = await Promise.all([fetchJson('/api/layout'), fetchJson('/api/callbacks')]);
    app.appendChild(render(layout));
    callbacks = specs;
    for (const cb of callbacks) refresh(cb);
  } catch (err) {
    app.replaceChildren(el('div', { className: 'error', textContent: err.message }));
  }
}

boot();
</script>
</body>
</html>
"##;
